//! Assetra HTTP client
//!
//! A typed client for the Assetra REST backend. Every request carries the
//! tenant header and, once a session exists, a bearer token. Responses
//! arrive in the backend's `{ "data": ... }` envelope; the typed endpoint
//! modules under [`api`] unwrap it so callers only see payload shapes.
//!
//! Authorization failures are not handled here beyond classification: a 401
//! fires the handler registered with [`set_unauthorized_handler`] and then
//! propagates as [`ClientError::AuthenticationFailed`]. Session teardown and
//! navigation belong to the embedding application.

pub mod api;
pub mod client;
pub mod error;
pub mod multipart;
pub mod types;
pub mod unauthorized;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::ClientError;
pub use multipart::FileUpload;
pub use types::{MessageResponse, PageMeta, Paginated};
pub use unauthorized::{clear_unauthorized_handler, set_unauthorized_handler};
