use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inventario_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inventario_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed store operation. `message` is what the client sees; the
    /// underlying cause is only logged.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The target row does not exist.
    #[error("Not found: {0}")]
    NotFound(&'static str),

    /// A malformed request (unparseable body or path).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attach the client-facing message to a failed store call.
pub trait StoreContext<T> {
    fn store_context(self, message: &'static str) -> AppResult<T>;
}

impl<T> StoreContext<T> for Result<T, sqlx::Error> {
    fn store_context(self, message: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Store { message, source })
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": validation_message(core),
                    "code": "VALIDATION_ERROR",
                }),
            ),
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": message,
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                json!({
                    "mensaje": message,
                    "code": "NOT_FOUND",
                }),
            ),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": message,
                    "code": "BAD_REQUEST",
                }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn validation_message(err: &CoreError) -> String {
    match err {
        CoreError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}
