//! Cross-origin resource sharing.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The API is public and unauthenticated, so browsers on any site may call it.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
