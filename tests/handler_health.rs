mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use snaplink::api::handlers::health_handler;
use snaplink::infrastructure::persistence::MemoryLinkRepository;

#[tokio::test]
async fn test_health_endpoint() {
    let (state, _repository) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler::<MemoryLinkRepository>))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "status": "healthy" })
    );
}

#[tokio::test]
async fn test_health_unaffected_by_store_contents() {
    let (state, repository) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler::<MemoryLinkRepository>))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::seed_link(&repository, "abc123", "https://example.com").await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}
