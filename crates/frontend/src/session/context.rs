//! Session context and provider
//!
//! The reducer is the single owner of the session. The persisted copy in
//! localStorage and the shared API client are updated as side effects of
//! the transitions here, so no other component ever writes either.

use super::storage::{self, StoredSession};
use crate::client::set_session_token;
use assetra_client::api::auth::AuthResponse;
use assetra_core::User;
use std::rc::Rc;
use yew::prelude::*;

/// Session state: anonymous until a login/register succeeds or a persisted
/// session rehydrates.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// A login or register round trip is in flight.
    pub loading: bool,
    /// Last auth failure, for the login/register forms.
    pub error: Option<String>,
    /// Storage rehydration has run (it runs at most once).
    pub hydrated: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<assetra_core::Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

pub enum SessionAction {
    /// A login/register call left the station.
    Started,
    /// Login or register succeeded.
    Established(AuthResponse),
    /// Login or register failed with a user-facing message.
    Failed(String),
    /// Result of the one-shot storage rehydration.
    Hydrated(Option<StoredSession>),
    /// `/auth/me` returned a fresh identity.
    UserRefreshed(User),
    /// Session ended: explicit logout, a 401, or a failed refresh.
    LoggedOut,
    ClearedError,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Started => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            SessionAction::Established(auth) => {
                storage::save(&auth);
                set_session_token(Some(&auth.access_token));
                Rc::new(Self {
                    user: Some(auth.user),
                    access_token: Some(auth.access_token),
                    refresh_token: Some(auth.refresh_token),
                    loading: false,
                    error: None,
                    hydrated: true,
                })
            }
            SessionAction::Failed(message) => Rc::new(Self {
                loading: false,
                error: Some(message),
                ..(*self).clone()
            }),
            SessionAction::Hydrated(Some(stored)) => {
                set_session_token(Some(&stored.access_token));
                Rc::new(Self {
                    user: Some(stored.user),
                    access_token: Some(stored.access_token),
                    refresh_token: stored.refresh_token,
                    loading: false,
                    error: None,
                    hydrated: true,
                })
            }
            SessionAction::Hydrated(None) => Rc::new(Self {
                hydrated: true,
                ..(*self).clone()
            }),
            SessionAction::UserRefreshed(user) => {
                storage::save_user(&user);
                Rc::new(Self {
                    user: Some(user),
                    ..(*self).clone()
                })
            }
            SessionAction::LoggedOut => {
                storage::clear();
                set_session_token(None);
                Rc::new(Self {
                    hydrated: true,
                    ..Self::default()
                })
            }
            SessionAction::ClearedError => Rc::new(Self {
                error: None,
                ..(*self).clone()
            }),
        }
    }
}

/// Session context handle shared through the component tree.
pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Wrap the app in SessionProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetra_core::{Role, UserStatus};

    fn sample_user() -> User {
        User {
            id: "u-1".into(),
            email: "kim@example.com".into(),
            first_name: "Kim".into(),
            last_name: "Reyes".into(),
            role: Role::Admin,
            status: UserStatus::Active,
            phone: None,
            avatar_url: None,
            email_verified_at: None,
            tenant_id: Some("acme".into()),
        }
    }

    fn reduce(state: SessionState, action: SessionAction) -> SessionState {
        (*Reducible::reduce(Rc::new(state), action)).clone()
    }

    #[test]
    fn failed_login_stays_anonymous_with_a_message() {
        let state = reduce(SessionState::default(), SessionAction::Started);
        assert!(state.loading);

        let state = reduce(state, SessionAction::Failed("Invalid email or password.".into()));
        assert!(!state.loading);
        assert!(!state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Invalid email or password."));
    }

    #[test]
    fn hydration_with_nothing_stored_yields_anonymous() {
        let state = reduce(SessionState::default(), SessionAction::Hydrated(None));
        assert!(state.hydrated);
        assert!(!state.is_authenticated());
        assert!(state.access_token.is_none());
    }

    #[test]
    fn logout_resets_everything_but_stays_hydrated() {
        let stored = StoredSession {
            access_token: "at-1".into(),
            refresh_token: Some("rt-1".into()),
            user: sample_user(),
        };
        let state = reduce(SessionState::default(), SessionAction::Hydrated(Some(stored)));
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(Role::Admin));

        let state = reduce(state, SessionAction::LoggedOut);
        assert!(!state.is_authenticated());
        assert!(state.hydrated);
        assert!(state.user.is_none());
    }
}
