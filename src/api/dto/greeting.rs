//! DTO for the greeting endpoint.

use serde::Serialize;

/// Fixed payload returned by `GET /api/hello`.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub greeting: &'static str,
}

impl GreetingResponse {
    pub const GREETING: &'static str = "hello API";
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self {
            greeting: Self::GREETING,
        }
    }
}
