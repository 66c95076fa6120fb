//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a submitted URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "code": "abc123", "short_url": "http://localhost:3000/abc123" }
/// ```
///
/// # Errors
///
/// Returns 400 with `{"error": "URL is required"}` for an empty URL and
/// `{"error": "please provide a valid URL"}` for anything that is not an
/// absolute http/https URL. Unexpected failures return 500.
pub async fn shorten_handler<R: LinkRepository>(
    State(state): State<AppState<R>>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    state.metrics.record_shorten_request();

    let (link, short_url) = match state.link_service.shorten(&payload.url).await {
        Ok(result) => result,
        Err(e) => {
            if !e.is_client_error() {
                state.metrics.record_internal_error();
            }
            return Err(e);
        }
    };

    state.metrics.record_url_shortened();

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
    }))
}
