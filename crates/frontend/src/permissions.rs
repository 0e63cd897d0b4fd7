//! Permission hook
//!
//! Capability flags derive from the session's role on every read; nothing
//! is cached, so they track login, logout, and role refreshes
//! automatically.

use crate::session::use_session;
use assetra_core::Capabilities;
use yew::prelude::*;

/// Capability flags for the current session.
#[hook]
pub fn use_permissions() -> Capabilities {
    let session = use_session();
    Capabilities::for_role(session.role())
}
