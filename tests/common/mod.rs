#![allow(dead_code)]

use std::sync::Arc;

use snaplink::application::services::LinkService;
use snaplink::domain::entities::NewShortLink;
use snaplink::infrastructure::metrics::Metrics;
use snaplink::infrastructure::persistence::MemoryLinkRepository;
use snaplink::state::AppState;
use snaplink::utils::code_generator::CodeGenerator;

pub const TEST_BASE_URL: &str = "http://s.test";

/// Builds an application state backed by a fresh in-memory store.
///
/// The repository handle is returned alongside so tests can seed and
/// inspect links directly.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());

    let link_service = Arc::new(LinkService::new(
        repository.clone(),
        CodeGenerator::new(),
        TEST_BASE_URL.to_string(),
    ));

    let state = AppState::new(link_service, Arc::new(Metrics::new()));

    (state, repository)
}

pub async fn seed_link(repository: &MemoryLinkRepository, code: &str, url: &str) {
    use snaplink::domain::repositories::LinkRepository;

    repository
        .insert(NewShortLink {
            code: code.to_string(),
            long_url: url.to_string(),
        })
        .await
        .unwrap();
}
