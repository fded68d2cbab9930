//! Application error type and its HTTP representation.
//!
//! Client-side problems (bad input, unknown identifiers) are answered with
//! `200 OK` and a JSON `{"error": ...}` body; existing clients of the API
//! depend on that shape. Infrastructure failures become `500` with a generic
//! message, and the underlying detail only goes to the log.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::db_error::is_unique_violation_on_short_url;

/// Message returned to clients for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is malformed, has no host, or its host does not resolve.
    #[error("invalid url")]
    InvalidUrl,

    /// The path parameter is not an integer.
    #[error("invalid short url")]
    InvalidShortUrl,

    /// No mapping exists for the requested identifier.
    #[error("No URL found")]
    NotFound,

    /// The short identifier is already taken.
    #[error("short url already exists")]
    Conflict,

    /// Storage or other infrastructure failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// HTTP status used for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidShortUrl | AppError::NotFound => {
                StatusCode::OK
            }
            AppError::Conflict | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Conflict | AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_short_url(&e) {
            return AppError::Conflict;
        }

        AppError::Internal(format!("Database error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_url_is_ok_with_error_body() {
        let (status, json) = body_json(AppError::InvalidUrl).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "error": "invalid url" }));
    }

    #[tokio::test]
    async fn test_invalid_short_url_message() {
        let (status, json) = body_json(AppError::InvalidShortUrl).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"], "invalid short url");
    }

    #[tokio::test]
    async fn test_not_found_message() {
        let (status, json) = body_json(AppError::NotFound).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"], "No URL found");
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let (status, json) = body_json(AppError::internal("connection refused")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_conflict_is_reported_as_internal() {
        let (status, json) = body_json(AppError::Conflict).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
    }

    #[test]
    fn test_sqlx_error_maps_to_internal() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
