//! Shared API client instance
//!
//! One client per session state, rebuilt whenever the token changes. The
//! UI runs on a single thread, so a thread-local slot is the whole
//! registry.

use crate::config;
use assetra_client::ApiClient;
use std::cell::RefCell;

thread_local! {
    static CLIENT: RefCell<Option<ApiClient>> = const { RefCell::new(None) };
}

/// Get the base URL for API calls
fn api_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        format!("{origin}{}", config::API_PATH)
    }
    // Native builds (unit tests) have no window; point at the dev backend.
    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("http://localhost:4000{}", config::API_PATH)
    }
}

fn build_client(token: Option<&str>) -> ApiClient {
    let mut builder = ApiClient::builder()
        .base_url(api_base_url())
        .tenant(config::DEFAULT_TENANT);
    if let Some(token) = token {
        builder = builder.token(token);
    }
    builder
        .build()
        .expect("client configuration is static and valid")
}

/// The client for the current session state.
pub fn api_client() -> ApiClient {
    CLIENT.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| build_client(None))
            .clone()
    })
}

/// Swap the shared client for one carrying (or dropping) a bearer token.
pub fn set_session_token(token: Option<&str>) {
    CLIENT.with(|cell| {
        *cell.borrow_mut() = Some(build_client(token));
    });
}
