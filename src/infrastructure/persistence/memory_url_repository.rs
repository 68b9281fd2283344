//! In-memory implementation of the URL repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;

/// Process-memory URL store.
///
/// State lives only for the lifetime of the service; there is no durability
/// layer. Writes take the lock exclusively for the duration of one map
/// insert, reads share it, so lookups proceed concurrently with unrelated
/// writes.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    records: RwLock<HashMap<u64, UrlRecord>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert(&self, record: UrlRecord) {
        let mut records = self.records.write().await;
        let previous = records.insert(record.id, record);
        // The allocator never reissues an id.
        debug_assert!(previous.is_none(), "duplicate short id inserted");
        debug!(count = records.len(), "stored short url record");
    }

    async fn get(&self, id: u64) -> Option<UrlRecord> {
        self.records.read().await.get(&id).cloned()
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_get() {
        let repo = MemoryUrlRepository::new();
        repo.insert(UrlRecord::new(1, "https://example.com".to_string()))
            .await;

        let record = repo.get(1).await.expect("record should be present");
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_id() {
        let repo = MemoryUrlRepository::new();
        repo.insert(UrlRecord::new(1, "https://example.com".to_string()))
            .await;

        assert!(repo.get(0).await.is_none());
        assert!(repo.get(2).await.is_none());
    }

    #[tokio::test]
    async fn test_reads_do_not_disturb_other_records() {
        let repo = MemoryUrlRepository::new();
        repo.insert(UrlRecord::new(1, "https://one.example".to_string()))
            .await;
        repo.insert(UrlRecord::new(2, "https://two.example".to_string()))
            .await;

        assert_eq!(repo.get(1).await.unwrap().original_url, "https://one.example");
        assert_eq!(repo.get(2).await.unwrap().original_url, "https://two.example");
        assert_eq!(repo.count().await, 2);
    }
}
