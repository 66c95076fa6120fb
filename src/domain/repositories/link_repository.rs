//! Repository trait for short link storage.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for the code-to-URL mapping.
///
/// The trait is the concurrency boundary of the whole service: every
/// mutation of link state goes through [`insert`](Self::insert) and
/// [`record_hit`](Self::record_hit). Implementations must make `insert`
/// an atomic insert-if-absent so that two concurrent inserts for the same
/// code resolve to exactly one winner, and must not serialize operations
/// on different codes behind a single lock.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link if its code is not already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyExists`] if the code is present; the
    /// existing link is never overwritten.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Increments the hit count for a code and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent.
    async fn record_hit(&self, code: &str) -> Result<u64, AppError>;

    /// Number of links currently stored. Doubles as the health probe.
    async fn count(&self) -> Result<usize, AppError>;
}
