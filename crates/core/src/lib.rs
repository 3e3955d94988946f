//! Shared domain types for the inventory service.
//!
//! Used by both the HTTP server and the client so the two agree on the
//! product payload, its validation rules and how prices are shown.

pub mod error;
pub mod format;
pub mod product;
pub mod types;
