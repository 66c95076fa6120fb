//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Not-found page rendered for codes that were never issued.
const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Link not found</title>
</head>
<body>
    <h1>404 - Link not found</h1>
    <p>The shortened URL you requested does not exist.</p>
</body>
</html>
"#;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Behavior
///
/// Known codes get a `302 Found` with the original URL in the `Location`
/// header. 302 rather than 301: links carry no permanence guarantee, and
/// a 301 would let clients cache the mapping forever. Unknown codes
/// render an HTML not-found page with status 404.
pub async fn redirect_handler<R: LinkRepository>(
    Path(code): Path<String>,
    State(state): State<AppState<R>>,
) -> Response {
    state.metrics.record_redirect_request();

    match state.link_service.resolve(&code).await {
        Ok(long_url) => {
            tracing::info!(code = %code, long_url = %long_url, "redirecting");
            (StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response()
        }
        Err(AppError::NotFound { .. }) => {
            state.metrics.record_url_not_found();
            tracing::warn!(code = %code, "unknown short code");
            (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
        }
        Err(e) => {
            state.metrics.record_internal_error();
            e.into_response()
        }
    }
}
