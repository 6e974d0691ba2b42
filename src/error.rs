//! API error taxonomy and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::config;

/// Errors surfaced by the catalog read paths.
///
/// Cache failures are deliberately absent: the cache is best-effort and its
/// errors are logged and swallowed at the point of use, never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A filter value that cannot be bound as a scalar query parameter.
    /// Query-string extraction normalizes types upstream, so this is defense
    /// in depth rather than an expected path.
    #[error("Invalid value for filter '{field}'")]
    InvalidFilterValue { field: &'static str },

    /// Connectivity, timeout or query failure from Postgres. `context` is the
    /// per-operation client-facing message; `detail` holds the underlying
    /// error text and is only exposed in development.
    #[error("{context}")]
    Store {
        context: &'static str,
        detail: String,
    },

    #[error("Product with ID {0} not found")]
    NotFound(String),
}

impl ApiError {
    pub fn store(context: &'static str, err: sqlx::Error) -> Self {
        Self::Store {
            context,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::InvalidFilterValue { .. } => (StatusCode::BAD_REQUEST, "Bad Request"),
            ApiError::Store { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Database Error"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
        };

        let mut body = json!({
            "error": error,
            "message": self.to_string(),
        });

        if let ApiError::Store { detail, .. } = &self {
            tracing::error!("❌ Store error: {}", detail);
            if config::is_development() {
                body["detail"] = json!(detail);
            }
        }

        (status, Json(body)).into_response()
    }
}
