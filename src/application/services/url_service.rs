//! Short URL creation and resolution service.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::domain::resolver::HostResolver;
use crate::error::AppError;
use crate::utils::short_id::parse_short_url;
use crate::utils::url_host::extract_host;

/// Service for creating and resolving short URLs.
///
/// Validates submitted URLs (syntax and DNS), allocates sequential
/// identifiers, and looks mappings up by identifier.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    resolver: Arc<dyn HostResolver>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// Validates `original_url` and stores it under the next identifier.
    ///
    /// The URL is stored exactly as submitted.
    ///
    /// # Identifier allocation
    ///
    /// The first candidate is `count + 1`. If another writer took it first,
    /// the insert fails with a conflict and the next integer is tried. Every
    /// conflict means some other insert succeeded, so the loop only runs as
    /// long as concurrent writers keep claiming the candidates ahead of it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if:
    /// - The URL does not parse or has no host
    /// - The host does not resolve to any address
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        let host = extract_host(original_url).map_err(|e| {
            debug!(url = original_url, reason = %e, "Rejected URL");
            AppError::InvalidUrl
        })?;

        self.ensure_resolvable(&host).await?;

        let mut candidate = self.repository.count().await? + 1;

        loop {
            match self
                .repository
                .insert(NewUrlMapping::new(candidate, original_url))
                .await
            {
                Ok(mapping) => {
                    info!(
                        short_url = mapping.short_url,
                        original_url = %mapping.original_url,
                        "Short URL created"
                    );
                    return Ok(mapping);
                }
                Err(AppError::Conflict) => {
                    debug!(short_url = candidate, "Short URL already taken, trying next");
                    candidate += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Looks up the mapping for a raw path segment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidShortUrl`] if the segment is not an integer.
    /// Returns [`AppError::NotFound`] if no mapping has that identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, raw_short_url: &str) -> Result<UrlMapping, AppError> {
        let short_url = parse_short_url(raw_short_url).ok_or(AppError::InvalidShortUrl)?;

        self.repository
            .find_by_short_url(short_url)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Fails with [`AppError::InvalidUrl`] unless `host` resolves to at least one address.
    async fn ensure_resolvable(&self, host: &str) -> Result<(), AppError> {
        match self.resolver.lookup(host).await {
            Ok(addrs) if !addrs.is_empty() => Ok(()),
            Ok(_) => {
                debug!(host, "DNS lookup returned no addresses");
                Err(AppError::InvalidUrl)
            }
            Err(e) => {
                debug!(host, error = %e, "DNS lookup failed");
                Err(AppError::InvalidUrl)
            }
        }
    }
}
