//! Wire types returned by the server.

use inventario_core::types::DbId;
use serde::Deserialize;

/// One element of `GET /api/productos`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub idproductos: DbId,
    pub nombre: String,
    pub cantidad: i32,
    pub precio: f64,
}

/// Body of a `201` from `POST /api/productos`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedResponse {
    pub mensaje: String,
    pub id: DbId,
}

/// Body of a `200` from update and delete.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub mensaje: String,
}
