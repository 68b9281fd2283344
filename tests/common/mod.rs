#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use shorturl::application::services::{ShortenerService, UrlValidator};
use shorturl::infrastructure::persistence::MemoryUrlRepository;
use shorturl::infrastructure::resolver::{HostResolver, ResolveError};
use shorturl::state::AppState;

/// Deterministic resolver for integration tests.
///
/// Hosts under the reserved `.invalid` TLD fail to resolve; everything else
/// succeeds. Counts invocations so tests can assert that stage-1 rejections
/// never reach the resolver.
pub struct StubResolver {
    calls: AtomicUsize,
    healthy: bool,
}

impl StubResolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            healthy: true,
        })
    }

    /// A resolver whose health probe fails; lookups still behave normally.
    pub fn unhealthy() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            healthy: false,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if host.ends_with(".invalid") {
            Err(ResolveError(format!("{host} not found")))
        } else {
            Ok(())
        }
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

/// Builds a fresh application state around the given resolver. Every test
/// gets its own empty store and a counter starting at 1.
pub fn create_test_state(resolver: Arc<StubResolver>) -> AppState {
    let repository = Arc::new(MemoryUrlRepository::new());
    let validator = UrlValidator::new(resolver.clone(), Duration::from_secs(1));
    let shortener = Arc::new(ShortenerService::new(validator, repository));

    AppState::new(shortener, resolver)
}
