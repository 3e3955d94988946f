//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests do NOT need an HTTP server or a database -- they call
//! `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use inventario_api::error::{AppError, StoreContext};
use inventario_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_returns_404_with_mensaje() {
    let err = AppError::NotFound("Producto no encontrado.");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["mensaje"], "Producto no encontrado.");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("la cantidad no puede ser negativa".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "la cantidad no puede ser negativa");
}

#[tokio::test]
async fn invalid_number_returns_400() {
    let err = AppError::Core(CoreError::InvalidNumber {
        field: "precio",
        value: "abc".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("precio"));
}

#[tokio::test]
async fn bad_request_returns_400() {
    let err = AppError::BadRequest("malformed body".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "malformed body");
}

#[tokio::test]
async fn store_error_returns_500_and_hides_cause() {
    let result: Result<(), sqlx::Error> = Err(sqlx::Error::PoolTimedOut);
    let err = result.store_context("Error al registrar el producto.").unwrap_err();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "Error al registrar el producto.");
    assert!(!json.to_string().contains("timed out"));
}
