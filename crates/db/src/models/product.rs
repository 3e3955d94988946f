//! Product row model.

use inventario_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `productos` table, serialized as-is on `GET /api/productos`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub idproductos: DbId,
    pub nombre: String,
    pub cantidad: i32,
    /// Stored as `NUMERIC(12,2)`, read back as `FLOAT8`.
    pub precio: f64,
}
