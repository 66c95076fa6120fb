//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::metrics::Metrics;
use crate::infrastructure::persistence::MemoryLinkRepository;

/// State shared by all request handlers.
///
/// Handlers never touch the store directly; everything goes through the
/// link service, which owns the repository handle. There are no ambient
/// globals: the state is constructed once at startup and cloned per
/// request (cheap, all fields are `Arc`s).
///
/// Generic over the repository so handler tests can run against a mock
/// store; production code uses the [`MemoryLinkRepository`] default.
pub struct AppState<R: LinkRepository = MemoryLinkRepository> {
    pub link_service: Arc<LinkService<R>>,
    pub metrics: Arc<Metrics>,
}

// Manual impl: deriving Clone would require `R: Clone`, which the Arc'd
// fields do not need.
impl<R: LinkRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            link_service: Arc::clone(&self.link_service),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl<R: LinkRepository> AppState<R> {
    pub fn new(link_service: Arc<LinkService<R>>, metrics: Arc<Metrics>) -> Self {
        Self {
            link_service,
            metrics,
        }
    }
}
