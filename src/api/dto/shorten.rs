//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Request to shorten a URL.
///
/// Accepted as JSON or as a urlencoded form; both carry a single `url` field.
/// Only presence is checked here. Syntax, host and DNS checks belong to
/// [`UrlService::shorten`](crate::application::services::UrlService::shorten).
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}

/// A created mapping, echoed back to the client.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlMapping> for ShortenResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_url,
        }
    }
}
