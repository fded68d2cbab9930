//! Host extraction for submitted URLs.

use url::{Host, Url};

/// Errors that can occur while extracting the host of a submitted URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlHostError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` as an absolute URL and returns the host to resolve.
///
/// Any scheme is accepted as long as the URL carries a non-empty host.
/// IP literals are returned without brackets so they can be fed straight
/// to the resolver.
///
/// # Errors
///
/// Returns [`UrlHostError::InvalidFormat`] for relative or malformed URLs and
/// [`UrlHostError::MissingHost`] for URLs such as `mailto:` that have no host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_host("https://Example.com/path").unwrap(), "example.com");
/// assert_eq!(extract_host("http://[::1]:8080/").unwrap(), "::1");
/// ```
pub fn extract_host(input: &str) -> Result<String, UrlHostError> {
    let url = Url::parse(input).map_err(|e| UrlHostError::InvalidFormat(e.to_string()))?;

    match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => Ok(domain.to_string()),
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        _ => Err(UrlHostError::MissingHost),
    }
}
