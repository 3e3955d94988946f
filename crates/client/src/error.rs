use inventario_core::error::CoreError;
use inventario_core::types::DbId;

use crate::api::ApiError;

/// Everything a client flow can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request failed or the server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Form fields did not parse or validate; nothing was sent.
    #[error(transparent)]
    Input(#[from] CoreError),

    /// No rendered row carries the requested action.
    #[error("No hay ningún producto con ID {0} en la tabla")]
    UnknownRow(DbId),

    /// The edit dialog was submitted while hidden.
    #[error("El diálogo de edición no está abierto")]
    DialogHidden,
}
