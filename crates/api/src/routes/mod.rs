pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /productos                 list, create
/// /productos/{id}            update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/productos", product::router())
}
