//! Repository for the `productos` table.
//!
//! Every method is exactly one statement; nothing here opens a transaction.

use inventario_core::product::ProductInput;
use inventario_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "idproductos, nombre, cantidad, precio::FLOAT8 AS precio";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List every product, newest identifier first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productos ORDER BY idproductos DESC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Insert a new product and return the identifier the store assigned.
    pub async fn create(pool: &PgPool, input: &ProductInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO productos (nombre, cantidad, precio)
             VALUES ($1, $2, $3::NUMERIC)
             RETURNING idproductos",
        )
        .bind(&input.nombre)
        .bind(input.cantidad)
        .bind(input.precio)
        .fetch_one(pool)
        .await
    }

    /// Overwrite all three fields of a product.
    ///
    /// Returns `true` if a row with the given `id` existed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE productos SET nombre = $2, cantidad = $3, precio = $4::NUMERIC
             WHERE idproductos = $1",
        )
        .bind(id)
        .bind(&input.nombre)
        .bind(input.cantidad)
        .bind(input.precio)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM productos WHERE idproductos = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
