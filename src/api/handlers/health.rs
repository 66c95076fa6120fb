//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::domain::repositories::LinkRepository;
use crate::state::AppState;

/// Returns service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// A lightweight store size probe confirms the mapping store is
/// reachable. A healthy service answers `200 {"status":"healthy"}`; a
/// failing probe answers `503 {"status":"degraded"}`.
pub async fn health_handler<R: LinkRepository>(
    State(state): State<AppState<R>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.link_service.store_size().await {
        Ok(_) => (StatusCode::OK, Json(HealthResponse { status: "healthy" })),
        Err(e) => {
            tracing::error!(error = %e, "health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse { status: "degraded" }),
            )
        }
    }
}
