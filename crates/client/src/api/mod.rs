//! Typed endpoint modules, one per backend resource
//!
//! Each module holds the wire shapes for its resource and extends
//! [`crate::ApiClient`] with the calls the views need. Every operation
//! issues exactly one HTTP request and either returns the unwrapped payload
//! or propagates the [`crate::ClientError`].

pub mod assets;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod locations;
pub mod organizations;
pub mod settings;
pub mod software;
pub mod statuses;
pub mod transactions;
pub mod users;
