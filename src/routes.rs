//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`  - Create a short link (rate limited)
//! - `GET  /{code}`   - Short link redirect
//! - `GET  /health`   - Health check
//! - `GET  /metrics`  - Prometheus-format counters
//!
//! Static routes are matched before the `/{code}` capture, so `health`
//! and `metrics` can never be shadowed by a short code.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the shortening endpoint
//! - **Security headers** - Added to every response
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, metrics_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{rate_limit, security, tracing};
use crate::infrastructure::persistence::MemoryLinkRepository;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The rate limiter keys on the peer socket address, so the server must
/// be built with `into_make_service_with_connect_info`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let shorten_routes = Router::new()
        .route("/shorten", post(shorten_handler::<MemoryLinkRepository>))
        .layer(rate_limit::layer());

    let router = Router::new()
        .merge(shorten_routes)
        .route("/health", get(health_handler::<MemoryLinkRepository>))
        .route("/metrics", get(metrics_handler::<MemoryLinkRepository>))
        .route("/{code}", get(redirect_handler::<MemoryLinkRepository>))
        .with_state(state)
        .layer(middleware::from_fn(security::headers))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
