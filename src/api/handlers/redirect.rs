//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Response Codes
///
/// - **302 Found**: `Location` carries the original URL
/// - **200 OK**: `{"error": "invalid short url"}` or `{"error": "No URL found"}`
/// - **500 Internal Server Error**: store failure
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.url_service.resolve(&short_url).await?;

    let location = location_header(&mapping.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value, falling back to the percent-encoded
/// serialization when the stored string is not a valid header value.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    let encoded = Url::parse(original_url)
        .map_err(|e| AppError::internal(format!("Stored URL is not parseable: {e}")))?;

    HeaderValue::from_str(encoded.as_str())
        .map_err(|e| AppError::internal(format!("Stored URL is not a valid header: {e}")))
}
