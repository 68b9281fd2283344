//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// Candidate URL; validated for shape and host resolvability.
    pub url: String,
}

/// Successful creation response.
///
/// `original_url` echoes the submitted string exactly; `short_url` is the
/// numeric identifier under which it was stored.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: u64,
}
