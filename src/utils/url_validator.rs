//! Submitted URL validation.
//!
//! Accepted URLs are stored exactly as submitted; resolution must return
//! the original string unchanged, so there is deliberately no
//! normalization step here.

use crate::error::AppError;
use url::Url;

/// Validates that the input is an absolute `http` or `https` URL.
///
/// # Rules
///
/// 1. Input must not be empty or whitespace-only
/// 2. Must not contain ASCII control characters
/// 3. Must parse as an absolute URL
/// 4. Scheme must be `http` or `https` (rejects `javascript:`, `file:`, ...)
/// 5. Must have a host
///
/// The control character check runs before parsing: the WHATWG parser
/// silently strips tabs and newlines, but the submitted string is what
/// gets stored and later emitted as a `Location` header, which cannot
/// carry control characters.
///
/// # Errors
///
/// Returns [`AppError::EmptyUrl`] for empty input and
/// [`AppError::InvalidUrl`] for anything that fails to parse.
pub fn validate_target_url(raw_url: &str) -> Result<(), AppError> {
    if raw_url.trim().is_empty() {
        return Err(AppError::EmptyUrl);
    }

    if raw_url.chars().any(|c| c.is_ascii_control()) {
        return Err(AppError::InvalidUrl {
            reason: "URL contains control characters".to_string(),
        });
    }

    let parsed = Url::parse(raw_url).map_err(|e| AppError::InvalidUrl {
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::InvalidUrl {
                reason: format!("unsupported scheme: {other}"),
            });
        }
    }

    if parsed.host_str().is_none() {
        return Err(AppError::InvalidUrl {
            reason: "missing host".to_string(),
        });
    }

    Ok(())
}
