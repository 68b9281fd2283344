//! Short URL creation and lookup service.

use std::sync::Arc;

use tracing::info;

use crate::application::services::url_validator::{UrlValidator, ValidationError};
use crate::domain::entities::UrlRecord;
use crate::domain::id_allocator::IdAllocator;
use crate::domain::repositories::UrlRepository;

/// Service-level failure for creation and lookup requests.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    /// Covers both validation stages; callers cannot tell a shape failure
    /// from a resolution failure.
    #[error("invalid url")]
    InvalidUrl(#[from] ValidationError),

    #[error("No short URL found for given input")]
    NotFound,
}

/// Orchestrates the creation pipeline and lookups.
///
/// A creation request runs validate → allocate → store. Allocation happens
/// only after validation succeeds, so a rejected request never consumes an
/// identifier and never touches the store.
pub struct ShortenerService {
    validator: UrlValidator,
    allocator: IdAllocator,
    repository: Arc<dyn UrlRepository>,
}

impl ShortenerService {
    /// Creates the service with its collaborators. Built once at startup;
    /// the allocator counter and the store live as long as the service.
    pub fn new(validator: UrlValidator, repository: Arc<dyn UrlRepository>) -> Self {
        Self {
            validator,
            allocator: IdAllocator::new(),
            repository,
        }
    }

    /// Validates `candidate` and stores it under a fresh identifier.
    ///
    /// The stored URL is the submitted string, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::InvalidUrl`] when either validation stage
    /// rejects the candidate.
    pub async fn shorten(&self, candidate: &str) -> Result<UrlRecord, ShortenError> {
        let original_url = self.validator.validate(candidate).await?;

        let id = self.allocator.next();
        let record = UrlRecord::new(id, original_url);
        self.repository.insert(record.clone()).await;

        info!(id, "short url created");
        Ok(record)
    }

    /// Looks up the record behind a short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] for identifiers that were never
    /// issued.
    pub async fn resolve(&self, id: u64) -> Result<UrlRecord, ShortenError> {
        self.repository
            .get(id)
            .await
            .ok_or(ShortenError::NotFound)
    }

    /// Number of stored records, for the health endpoint.
    pub async fn stored_count(&self) -> usize {
        self.repository.count().await
    }
}
