//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::domain::repositories::ShortUrlRepository;

#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService>,
}

impl AppState {
    /// Builds the state on top of any record store.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self {
            short_url_service: Arc::new(ShortUrlService::new(repository)),
        }
    }
}
