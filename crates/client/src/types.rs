//! Response envelope shapes shared by every endpoint module

use serde::{Deserialize, Serialize};

/// The `{ "data": T }` wrapper most endpoints respond with.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Pagination metadata returned alongside list payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// A page of records: `{ "data": [T], "meta": {...} }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Plain `{ "message": ... }` responses (password-reset endpoints).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
