mod common;

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use snaplink::api::handlers::health_handler;
use snaplink::api::middleware::security;
use snaplink::infrastructure::persistence::MemoryLinkRepository;

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let (state, _repository) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler::<MemoryLinkRepository>))
        .with_state(state)
        .layer(middleware::from_fn(security::headers));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
    assert_eq!(
        response.header("referrer-policy"),
        "strict-origin-when-cross-origin"
    );
}
