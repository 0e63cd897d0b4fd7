//! Toast notifications
//!
//! An insertion-ordered queue of transient messages, owned by a provider
//! mounted once at the app root. Identifiers increase monotonically for
//! the lifetime of the page. The queue is bounded: at capacity the oldest
//! toast is dropped before the new one is appended. Dismissal by id is a
//! no-op when the toast is already gone, so an auto-expiry timer racing a
//! manual dismissal is harmless.

use crate::config::ToastConfig;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastSeverity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-600",
            Self::Error => "bg-red-600",
            Self::Info => "bg-blue-600",
            Self::Warning => "bg-amber-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
    /// Auto-dismiss delay; non-positive means the toast stays until
    /// dismissed.
    pub duration_ms: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Push {
        message: String,
        severity: ToastSeverity,
        duration_ms: i32,
    },
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push {
                message,
                severity,
                duration_ms,
            } => {
                let mut toasts = self.toasts.clone();
                if toasts.len() >= ToastConfig::MAX_QUEUED {
                    toasts.remove(0);
                }
                toasts.push(Toast {
                    id: self.next_id,
                    message,
                    severity,
                    duration_ms,
                });
                Rc::new(Self {
                    toasts,
                    next_id: self.next_id + 1,
                })
            }
            ToastAction::Dismiss(id) => {
                let toasts: Vec<Toast> = self
                    .toasts
                    .iter()
                    .filter(|toast| toast.id != id)
                    .cloned()
                    .collect();
                Rc::new(Self {
                    toasts,
                    next_id: self.next_id,
                })
            }
        }
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Convenience surface over the raw dispatch, mirroring how views actually
/// talk to the queue.
pub trait ToastHandle {
    fn show(&self, message: impl Into<String>, severity: ToastSeverity, duration_ms: i32);
    fn success(&self, message: impl Into<String>);
    fn error(&self, message: impl Into<String>);
    fn info(&self, message: impl Into<String>);
    fn warning(&self, message: impl Into<String>);
}

impl ToastHandle for ToastContext {
    fn show(&self, message: impl Into<String>, severity: ToastSeverity, duration_ms: i32) {
        self.dispatch(ToastAction::Push {
            message: message.into(),
            severity,
            duration_ms,
        });
    }

    fn success(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Success, ToastConfig::DEFAULT_DURATION_MS);
    }

    fn error(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Error, ToastConfig::DEFAULT_DURATION_MS);
    }

    fn info(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Info, ToastConfig::DEFAULT_DURATION_MS);
    }

    fn warning(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Warning, ToastConfig::DEFAULT_DURATION_MS);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toasts}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

/// Hook to use the toast queue
#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext not found. Wrap the app in ToastProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ToastState, action: ToastAction) -> ToastState {
        (*Reducible::reduce(Rc::new(state), action)).clone()
    }

    fn push(state: ToastState, message: &str) -> ToastState {
        reduce(
            state,
            ToastAction::Push {
                message: message.into(),
                severity: ToastSeverity::Info,
                duration_ms: 5_000,
            },
        )
    }

    #[test]
    fn identifiers_increase_monotonically() {
        let state = push(ToastState::default(), "one");
        let state = push(state, "two");
        let state = reduce(state, ToastAction::Dismiss(0));
        let state = push(state, "three");

        let ids: Vec<u32> = state.toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn dismiss_removes_exactly_once_and_tolerates_races() {
        let state = push(ToastState::default(), "transient");
        assert_eq!(state.toasts.len(), 1);

        // Manual dismissal, then the expiry timer firing for the same id.
        let state = reduce(state, ToastAction::Dismiss(0));
        assert!(state.toasts.is_empty());
        let state = reduce(state, ToastAction::Dismiss(0));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn queue_is_bounded_dropping_the_oldest() {
        let mut state = ToastState::default();
        for index in 0..=ToastConfig::MAX_QUEUED {
            state = push(state, &format!("toast {index}"));
        }
        assert_eq!(state.toasts.len(), ToastConfig::MAX_QUEUED);
        // Toast 0 fell off; insertion order is preserved for the rest.
        assert_eq!(state.toasts[0].id, 1);
        assert_eq!(state.toasts.last().map(|toast| toast.id), Some(ToastConfig::MAX_QUEUED as u32));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let state = push(push(push(ToastState::default(), "a"), "b"), "c");
        let messages: Vec<&str> = state
            .toasts
            .iter()
            .map(|toast| toast.message.as_str())
            .collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }
}
