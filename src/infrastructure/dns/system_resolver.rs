//! Resolver backed by the operating system's name lookup.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use tracing::debug;

use crate::domain::resolver::HostResolver;

/// Resolves hostnames through `getaddrinfo` via [`tokio::net::lookup_host`].
///
/// The lookup runs on tokio's blocking pool, so a slow resolver only delays
/// the request that triggered it. No timeout is applied beyond the system
/// resolver's own.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .map(|addr| addr.ip())
            .collect();

        debug!(host, resolved = addrs.len(), "DNS lookup finished");

        Ok(addrs)
    }
}
