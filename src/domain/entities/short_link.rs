//! ShortLink entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with usage metadata.
///
/// The mapping between a short code and the original URL as submitted by
/// the client. `long_url` is stored verbatim so resolution always yields
/// the URL back unchanged; `created_at` is immutable after creation and
/// `hit_count` only ever increases.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub hit_count: u64,
}

impl ShortLink {
    /// Creates a fresh link with a zero hit count, stamped with the current time.
    pub fn new(code: String, long_url: String) -> Self {
        Self {
            code,
            long_url,
            created_at: Utc::now(),
            hit_count: 0,
        }
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub long_url: String,
}
