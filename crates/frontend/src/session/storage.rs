//! Session persistence
//!
//! Three localStorage keys hold the access token, refresh token, and the
//! JSON-serialized user. The persisted copy is a cache of the in-memory
//! session, never a second owner. A malformed user payload is treated the
//! same as no session at all: everything is cleared (fail closed).

use crate::config::SessionConfig;
use assetra_client::api::auth::AuthResponse;
use assetra_core::User;
use web_sys::Storage;

/// A rehydrated session as read back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: User,
}

fn local_storage() -> Option<Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
    // Native builds (unit tests) have no window; behave like a browser with
    // storage disabled.
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Decode the persisted user record. `None` for anything unparseable.
pub fn parse_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Read the persisted session, clearing every key when the user payload is
/// corrupt.
pub fn load() -> Option<StoredSession> {
    let storage = local_storage()?;
    let access_token = storage.get_item(SessionConfig::ACCESS_TOKEN_KEY).ok()??;
    let user_json = storage.get_item(SessionConfig::USER_KEY).ok()??;
    let refresh_token = storage
        .get_item(SessionConfig::REFRESH_TOKEN_KEY)
        .ok()
        .flatten();

    match parse_user(&user_json) {
        Some(user) => Some(StoredSession {
            access_token,
            refresh_token,
            user,
        }),
        None => {
            tracing::warn!("stored user record is malformed, clearing session");
            clear();
            None
        }
    }
}

/// Persist a freshly established session.
pub fn save(auth: &AuthResponse) {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.set_item(SessionConfig::ACCESS_TOKEN_KEY, &auth.access_token);
    let _ = storage.set_item(SessionConfig::REFRESH_TOKEN_KEY, &auth.refresh_token);
    if let Ok(serialized) = serde_json::to_string(&auth.user) {
        let _ = storage.set_item(SessionConfig::USER_KEY, &serialized);
    }
}

/// Persist a refreshed user record, leaving tokens untouched.
pub fn save_user(user: &User) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(serialized) = serde_json::to_string(user) {
        let _ = storage.set_item(SessionConfig::USER_KEY, &serialized);
    }
}

/// Drop every persisted session key.
pub fn clear() {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.remove_item(SessionConfig::ACCESS_TOKEN_KEY);
    let _ = storage.remove_item(SessionConfig::REFRESH_TOKEN_KEY);
    let _ = storage.remove_item(SessionConfig::USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_accepts_a_valid_record() {
        let user = parse_user(
            r#"{
                "id": "u-1",
                "email": "kim@example.com",
                "first_name": "Kim",
                "last_name": "Reyes",
                "role": "manager",
                "status": "active"
            }"#,
        )
        .unwrap();
        assert_eq!(user.id, "u-1");
    }

    #[test]
    fn parse_user_rejects_malformed_payloads() {
        assert!(parse_user("not json").is_none());
        assert!(parse_user("{\"id\": \"u-1\"}").is_none());
        assert!(parse_user("").is_none());
    }
}
