//! UrlRecord entity representing a stored short-URL mapping.

use chrono::{DateTime, Utc};

/// A single shortened URL entry.
///
/// Maps a numeric short identifier to the original URL exactly as it was
/// submitted. Records are immutable once stored: the identifier is never
/// reissued and the URL is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// Short identifier, unique for the process lifetime, starting at 1.
    pub id: u64,
    /// The URL as submitted by the caller, not normalized.
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a record stamped with the current time.
    pub fn new(id: u64, original_url: String) -> Self {
        Self {
            id,
            original_url,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = UrlRecord::new(1, "https://example.com".to_string());

        assert_eq!(record.id, 1);
        assert_eq!(record.original_url, "https://example.com");
        assert!(record.created_at <= Utc::now());
    }

    #[test]
    fn test_record_keeps_url_verbatim() {
        // The store keeps the URL as submitted, uppercase host and all.
        let record = UrlRecord::new(7, "https://EXAMPLE.COM:443/Path#frag".to_string());
        assert_eq!(record.original_url, "https://EXAMPLE.COM:443/Path#frag");
    }
}
