//! Handlers for the `/productos` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inventario_core::product::ProductInput;
use inventario_core::types::DbId;
use inventario_db::models::product::Product;
use inventario_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult, StoreContext};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

pub const LIST_FAILED: &str = "Error interno del servidor.";
pub const CREATE_FAILED: &str = "Error al registrar el producto.";
pub const DELETE_FAILED: &str = "Error al eliminar el producto.";
pub const UPDATE_FAILED: &str = "Error al actualizar el producto.";

pub const CREATED: &str = "Producto agregado exitosamente";
pub const DELETE_NOT_FOUND: &str = "Producto no encontrado.";
pub const UPDATE_NOT_FOUND: &str = "Producto no encontrado para actualizar.";

/// GET /api/productos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool)
        .await
        .store_context(LIST_FAILED)?;
    Ok(Json(products))
}

/// POST /api/productos
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    input.check()?;

    let id = ProductRepo::create(&state.pool, &input)
        .await
        .store_context(CREATE_FAILED)?;
    tracing::info!(id, nombre = %input.nombre, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            mensaje: CREATED,
            id,
        }),
    ))
}

/// PUT /api/productos/{id}
///
/// Full replacement: all three fields are overwritten.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.check()?;

    let updated = ProductRepo::update(&state.pool, id, &input)
        .await
        .store_context(UPDATE_FAILED)?;
    if !updated {
        return Err(AppError::NotFound(UPDATE_NOT_FOUND));
    }
    tracing::info!(id, "Product updated");

    Ok(Json(MessageResponse {
        mensaje: format!("Producto con ID {id} actualizado exitosamente"),
    }))
}

/// DELETE /api/productos/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path?;

    let deleted = ProductRepo::delete(&state.pool, id)
        .await
        .store_context(DELETE_FAILED)?;
    if !deleted {
        return Err(AppError::NotFound(DELETE_NOT_FOUND));
    }
    tracing::info!(id, "Product deleted");

    Ok(Json(MessageResponse {
        mensaje: format!("Producto con ID {id} eliminado exitosamente"),
    }))
}
