//! REST client for the inventory server.
//!
//! Wraps the four `/api/productos` routes using [`reqwest`].

use inventario_core::product::ProductInput;
use inventario_core::types::DbId;

use crate::model::{CreatedResponse, MessageResponse, Product};

/// HTTP client for one inventory server.
pub struct ProductApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connection refused, DNS, bad body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Server error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

impl ProductApi {
    /// Create a client for a server such as `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/productos`: every product, newest first.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.client.get(self.collection_url()).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/productos`.
    pub async fn create(&self, input: &ProductInput) -> Result<CreatedResponse, ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /api/productos/{id}`: replaces all three fields.
    pub async fn update(
        &self,
        id: DbId,
        input: &ProductInput,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/productos/{id}`.
    pub async fn delete(&self, id: DbId) -> Result<MessageResponse, ApiError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn collection_url(&self) -> String {
        format!("{}/api/productos", self.base_url)
    }

    fn item_url(&self, id: DbId) -> String {
        format!("{}/api/productos/{id}", self.base_url)
    }

    /// Turn a non-2xx response into [`ApiError::Status`], keeping the body
    /// text for the log.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let api = ProductApi::new("http://localhost:3000/");
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.collection_url(), "http://localhost:3000/api/productos");
        assert_eq!(api.item_url(7), "http://localhost:3000/api/productos/7");
    }

    #[test]
    fn status_error_exposes_code() {
        let err = ApiError::Status {
            status: 404,
            body: "{}".into(),
        };
        assert_eq!(err.status(), Some(404));
    }
}
