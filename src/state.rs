//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::HostResolver;
use crate::domain::repositories::UrlRepository;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    /// Builds the state from a repository and a resolver.
    pub fn new(repository: Arc<dyn UrlRepository>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository, resolver)),
        }
    }
}
