//! Repository trait for short URL data access.

use crate::domain::entities::UrlRecord;
use async_trait::async_trait;

/// Repository interface for the short-URL store.
///
/// The store owns every [`UrlRecord`] exclusively: records enter it only
/// through the validated creation path and are never updated or removed for
/// the life of the process.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new record.
    ///
    /// Precondition: `record.id` has never been inserted before. The id
    /// allocator guarantees this; a duplicate is a programming error, not a
    /// recoverable condition. The record is visible to every `get` issued
    /// after `insert` returns.
    async fn insert(&self, record: UrlRecord);

    /// Looks up a record by its short identifier.
    ///
    /// Returns `None` for identifiers that were never issued. No side effects.
    async fn get(&self, id: u64) -> Option<UrlRecord>;

    /// Number of records currently stored. Used by the health endpoint.
    async fn count(&self) -> usize;
}
