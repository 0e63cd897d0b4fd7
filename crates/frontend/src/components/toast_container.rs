//! Toast rendering and expiry scheduling
//!
//! Timers live here rather than in the reducer: whenever a toast with a
//! positive duration appears, one dismissal timer is armed for its id. A
//! timer firing after a manual dismissal is a no-op in the reducer.

use crate::toast::{use_toast, ToastAction};
use gloo::timers::callback::Timeout;
use std::collections::HashSet;
use yew::prelude::*;

#[function_component(ToastContainer)]
pub fn toast_container() -> Html {
    let toasts = use_toast();
    let scheduled = use_mut_ref(HashSet::<u32>::new);

    {
        let toasts = toasts.clone();
        let scheduled = scheduled.clone();
        use_effect_with((*toasts).clone(), move |state| {
            for toast in state.toasts.iter().filter(|toast| toast.duration_ms > 0) {
                if scheduled.borrow_mut().insert(toast.id) {
                    let handle = toasts.clone();
                    let id = toast.id;
                    #[allow(clippy::cast_sign_loss)]
                    Timeout::new(toast.duration_ms as u32, move || {
                        handle.dispatch(ToastAction::Dismiss(id));
                    })
                    .forget();
                }
            }
        });
    }

    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2">
            {for toasts.toasts.iter().map(|toast| {
                let on_dismiss = {
                    let toasts = toasts.clone();
                    let id = toast.id;
                    Callback::from(move |_| toasts.dispatch(ToastAction::Dismiss(id)))
                };
                html! {
                    <div
                        key={toast.id}
                        class={format!("{} text-white rounded-lg shadow-lg px-4 py-3 flex items-center gap-3", toast.severity.css_class())}
                    >
                        <span class="text-sm">{&toast.message}</span>
                        <button
                            onclick={on_dismiss}
                            class="ml-auto text-white/80 hover:text-white"
                            aria-label="Dismiss"
                        >
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
