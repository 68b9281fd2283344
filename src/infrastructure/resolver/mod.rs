//! Host resolution backends.
//!
//! [`service::HostResolver`] is the seam the validation pipeline calls
//! through; [`DnsResolver`] is the production implementation over the system
//! resolver. Tests substitute a mock or stub.

pub mod dns_resolver;
pub mod service;

pub use dns_resolver::DnsResolver;
pub use service::{HostResolver, ResolveError};

#[cfg(test)]
pub use service::MockHostResolver;
