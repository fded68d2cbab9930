//! Hostname resolution contract.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

/// Resolves hostnames to IP addresses.
///
/// Used to reject URLs whose host does not exist before a mapping is stored.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - the operating system resolver
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Looks up the addresses of `host`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the lookup fails (unknown host, resolver down).
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
