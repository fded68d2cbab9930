//! Top-level router configuration combining API routes and static assets.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page (`<views>/index.html`)
//! - `/api/*`          - REST API
//! - `/public/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin headers
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use std::path::PathBuf;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Filesystem locations of the static content.
#[derive(Debug, Clone)]
pub struct AssetDirs {
    /// Directory served under `/public`.
    pub public_dir: PathBuf,
    /// Directory holding `index.html` for `/`.
    pub views_dir: PathBuf,
}

impl AssetDirs {
    pub fn new(public_dir: impl Into<PathBuf>, views_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
            views_dir: views_dir.into(),
        }
    }

    /// Path of the landing page.
    pub fn index_page(&self) -> PathBuf {
        self.views_dir.join("index.html")
    }
}

impl Default for AssetDirs {
    fn default() -> Self {
        Self::new("public", "views")
    }
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `assets` - where the landing page and public assets live
pub fn app_router(state: AppState, assets: &AssetDirs) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(assets.index_page()))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(&assets.public_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
