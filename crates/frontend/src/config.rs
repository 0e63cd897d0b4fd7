//! Frontend configuration

/// Versioned API path appended to the window origin.
pub const API_PATH: &str = "/api/v1";

/// Tenant partition this deployment is served for. Overridable at build
/// time; every request carries it in the tenant header.
pub const DEFAULT_TENANT: &str = match option_env!("ASSETRA_TENANT") {
    Some(tenant) => tenant,
    None => "acme",
};

/// Base window title; routes prepend their own.
pub const APP_TITLE: &str = "Assetra";

/// Session persistence
pub struct SessionConfig;

impl SessionConfig {
    /// localStorage key for the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "auth_token";

    /// localStorage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refresh_token";

    /// localStorage key for the JSON-serialized user record
    pub const USER_KEY: &'static str = "user";
}

/// Toast queue tuning
pub struct ToastConfig;

impl ToastConfig {
    /// Default auto-dismiss delay in milliseconds
    pub const DEFAULT_DURATION_MS: i32 = 5_000;

    /// Queue capacity; the oldest entry is dropped when exceeded
    pub const MAX_QUEUED: usize = 8;
}
