//! System DNS resolver backend.

use async_trait::async_trait;
use tokio::net::lookup_host;
use tracing::debug;

use super::service::{HostResolver, ResolveError};

/// Resolves hostnames through the operating system resolver.
///
/// `lookup_host` needs a port to form a socket address; the port is
/// irrelevant to the answer, so a fixed one is used.
#[derive(Debug, Default)]
pub struct DnsResolver;

const LOOKUP_PORT: u16 = 80;

impl DnsResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        let mut addrs = lookup_host((host, LOOKUP_PORT))
            .await
            .map_err(|e| ResolveError(e.to_string()))?;

        match addrs.next() {
            Some(addr) => {
                debug!(%host, %addr, "host resolved");
                Ok(())
            }
            None => Err(ResolveError(format!("no addresses for {host}"))),
        }
    }

    async fn health_check(&self) -> bool {
        self.resolve("localhost").await.is_ok()
    }
}
