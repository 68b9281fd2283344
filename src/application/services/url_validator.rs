//! Two-stage candidate URL validation.
//!
//! Stage 1 is a pure shape check (http/https scheme); stage 2 extracts the
//! hostname and confirms it resolves. Only stage 2 goes to the network, and
//! only after stage 1 has passed.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::infrastructure::resolver::HostResolver;

/// Compiled once; anchors the scheme check, case-insensitive.
static SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://.+").unwrap());

/// Why a candidate URL was rejected.
///
/// The two kinds stay distinct internally (they log differently) but are
/// surfaced to callers as the same `invalid url` response.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("candidate is not an http(s) URL")]
    MalformedUrl,

    #[error("host did not resolve: {0}")]
    UnresolvableHost(String),
}

/// Validation pipeline for submitted URLs.
///
/// Issues exactly one resolver call per accepted-shape candidate, bounded by
/// `resolve_timeout`. No retries: a single resolver error is terminal for
/// that request.
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
    resolve_timeout: Duration,
}

impl UrlValidator {
    pub fn new(resolver: Arc<dyn HostResolver>, resolve_timeout: Duration) -> Self {
        Self {
            resolver,
            resolve_timeout,
        }
    }

    /// Validates a candidate and returns it unchanged on success.
    ///
    /// The service stores the URL exactly as submitted, so no normalization
    /// happens here.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MalformedUrl`] when the candidate fails the
    ///   scheme check; no outbound call is made in this case.
    /// - [`ValidationError::UnresolvableHost`] when the hostname is missing,
    ///   unparsable, fails resolution, or the resolution times out.
    pub async fn validate(&self, candidate: &str) -> Result<String, ValidationError> {
        if !SCHEME_REGEX.is_match(candidate) {
            return Err(ValidationError::MalformedUrl);
        }

        let host = Self::extract_host(candidate)?;

        match tokio::time::timeout(self.resolve_timeout, self.resolver.resolve(&host)).await {
            Ok(Ok(())) => Ok(candidate.to_string()),
            Ok(Err(e)) => {
                debug!(%host, error = %e, "host resolution failed");
                Err(ValidationError::UnresolvableHost(e.to_string()))
            }
            Err(_) => {
                debug!(%host, timeout_ms = self.resolve_timeout.as_millis() as u64, "host resolution timed out");
                Err(ValidationError::UnresolvableHost("timed out".to_string()))
            }
        }
    }

    /// Extracts the hostname component.
    ///
    /// A candidate that passed the scheme check but has no usable host
    /// (`http://?q`, `http://#frag`) counts as a resolution failure, not a
    /// separate error kind.
    fn extract_host(candidate: &str) -> Result<String, ValidationError> {
        let url = Url::parse(candidate)
            .map_err(|e| ValidationError::UnresolvableHost(e.to_string()))?;

        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(host.to_string()),
            _ => Err(ValidationError::UnresolvableHost(
                "empty host".to_string(),
            )),
        }
    }
}
