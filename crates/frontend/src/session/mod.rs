//! Session lifecycle
//!
//! The context reducer owns the state; the async operations here drive the
//! auth endpoints and feed results back through it. Login and register are
//! serialized: a submission while one is already in flight is ignored
//! instead of letting the later response silently win.

pub mod context;
pub mod storage;

pub use context::{use_session, SessionAction, SessionContext, SessionProvider, SessionState};

use crate::client::api_client;
use assetra_client::api::auth::{Credentials, RegisterRequest};
use assetra_client::ClientError;

fn login_failure_message(error: &ClientError) -> String {
    match error {
        ClientError::AuthenticationFailed(_) => "Invalid email or password.".to_string(),
        ClientError::BadRequest(message) => message.clone(),
        _ => "Login failed. Please try again.".to_string(),
    }
}

fn register_failure_message(error: &ClientError) -> String {
    match error {
        ClientError::BadRequest(message) => message.clone(),
        _ => "Registration failed. Please try again.".to_string(),
    }
}

/// Exchange credentials for a session. Returns whether it succeeded; the
/// failure message lands in the session state, never as a panic.
pub async fn login(session: &SessionContext, credentials: Credentials) -> bool {
    if session.loading {
        return false;
    }
    session.dispatch(SessionAction::Started);
    match api_client().login(&credentials).await {
        Ok(auth) => {
            session.dispatch(SessionAction::Established(auth));
            true
        }
        Err(error) => {
            tracing::debug!(%error, "login failed");
            session.dispatch(SessionAction::Failed(login_failure_message(&error)));
            false
        }
    }
}

/// Create an account and open a session. Same shape as [`login`].
pub async fn register(session: &SessionContext, data: RegisterRequest) -> bool {
    if session.loading {
        return false;
    }
    session.dispatch(SessionAction::Started);
    match api_client().register(&data).await {
        Ok(auth) => {
            session.dispatch(SessionAction::Established(auth));
            true
        }
        Err(error) => {
            tracing::debug!(%error, "registration failed");
            session.dispatch(SessionAction::Failed(register_failure_message(&error)));
            false
        }
    }
}

/// End the session. The remote call is best-effort; local state and
/// storage are cleared no matter what.
pub async fn logout(session: &SessionContext) {
    let client = api_client();
    if client.is_authenticated() {
        if let Err(error) = client.logout().await {
            tracing::warn!(%error, "remote logout failed, clearing local session anyway");
        }
    }
    session.dispatch(SessionAction::LoggedOut);
}

/// Re-fetch the current identity. Any failure means the session is assumed
/// invalid and is torn down rather than retried.
pub async fn refresh_user(session: &SessionContext) {
    if session.access_token.is_none() {
        return;
    }
    match api_client().current_user().await {
        Ok(user) => session.dispatch(SessionAction::UserRefreshed(user)),
        Err(error) => {
            tracing::warn!(%error, "identity refresh failed, ending session");
            session.dispatch(SessionAction::LoggedOut);
        }
    }
}

/// Rehydrate from storage, at most once per session lifetime.
pub fn hydrate(session: &SessionContext) {
    if session.hydrated {
        return;
    }
    session.dispatch(SessionAction::Hydrated(storage::load()));
}
