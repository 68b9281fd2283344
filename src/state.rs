//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::resolver::HostResolver;

/// Owned once by the server and cloned into every handler.
///
/// The counter and the store live inside [`ShortenerService`]; there is no
/// ambient global state.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub resolver: Arc<dyn HostResolver>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            shortener,
            resolver,
        }
    }
}
