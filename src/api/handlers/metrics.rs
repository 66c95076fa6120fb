//! Handler for the metrics endpoint.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::repositories::LinkRepository;
use crate::infrastructure::metrics::PROMETHEUS_CONTENT_TYPE;
use crate::state::AppState;

/// Exposes service counters in the Prometheus text format.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// The store size gauge is read live from the mapping store; if the store
/// is unreachable the gauge falls back to zero rather than failing the
/// whole scrape.
pub async fn metrics_handler<R: LinkRepository>(State(state): State<AppState<R>>) -> Response {
    let stored_links = match state.link_service.store_size().await {
        Ok(size) => size,
        Err(e) => {
            tracing::error!(error = %e, "failed to read store size for metrics");
            state.metrics.record_internal_error();
            0
        }
    };

    let body = state.metrics.render(stored_links);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        body,
    )
        .into_response()
}
