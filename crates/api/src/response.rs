//! Response bodies for the product routes.
//!
//! Success payloads carry a human-readable `mensaje`; error payloads are
//! produced by [`crate::error::AppError`].

use inventario_core::types::DbId;
use serde::Serialize;

/// `{ "mensaje": ... }` returned by update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

/// `{ "mensaje": ..., "id": ... }` returned by create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub mensaje: &'static str,
    pub id: DbId,
}
