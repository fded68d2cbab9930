//! Handler for short URL creation.

use axum::{Json, extract::State};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::{JsonOrForm, PayloadRejection};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON (`{"url": "https://example.com"}`) or a urlencoded form
/// (`url=https%3A%2F%2Fexample.com`).
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// # Errors
///
/// - `200 {"error": "invalid url"}` when the body is unreadable, `url` is
///   missing or malformed, or its host does not resolve
/// - `500 {"error": "Internal server error"}` when the store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<JsonOrForm<ShortenRequest>, PayloadRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let JsonOrForm(payload) = payload.map_err(|e| {
        debug!(error = %e, "Unreadable shorten request body");
        AppError::InvalidUrl
    })?;

    payload.validate().map_err(|e| {
        debug!(error = %e, "Shorten request failed validation");
        AppError::InvalidUrl
    })?;

    let mapping = state.url_service.shorten(&payload.url).await?;

    Ok(Json(mapping.into()))
}
