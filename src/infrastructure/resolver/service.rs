//! Host resolution service trait.

use async_trait::async_trait;

/// Error from a resolver backend: host not found, resolver failure, or an
/// empty answer. The validator treats every variant the same way.
#[derive(Debug, thiserror::Error)]
#[error("host resolution failed: {0}")]
pub struct ResolveError(pub String);

/// Outbound host-resolution seam.
///
/// The validation pipeline issues exactly one `resolve` call per creation
/// request; implementations must not retry internally.
///
/// # Implementations
///
/// - [`super::DnsResolver`] - system DNS via `tokio::net::lookup_host`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Confirms that `host` maps to at least one network address.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;

    /// Liveness probe used by the health endpoint.
    async fn health_check(&self) -> bool;
}
