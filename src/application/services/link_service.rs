//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_target_url;

/// Ceiling for insert retries when a generated code is already taken.
///
/// The counter-based generator cannot collide with itself, so this only
/// guards against codes surviving from a previous counter epoch (e.g. a
/// persistent store outliving a process restart).
const MAX_CODE_ATTEMPTS: usize = 5;

/// Service for creating short links and resolving them back to their URL.
///
/// Owns the code generator and the repository handle; all state mutation
/// flows through the repository's atomic operations.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    generator: CodeGenerator,
    base_url: String,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix composed into short URLs; a
    /// trailing slash is tolerated and trimmed at composition time.
    pub fn new(repository: Arc<R>, generator: CodeGenerator, base_url: String) -> Self {
        Self {
            repository,
            generator,
            base_url,
        }
    }

    /// Shortens a URL, returning the stored link and its full short URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyUrl`] for empty input
    /// - [`AppError::InvalidUrl`] for input that is not an absolute
    ///   http/https URL
    /// - [`AppError::GenerationExhausted`] if every generated code was
    ///   already taken ([`MAX_CODE_ATTEMPTS`] tries)
    pub async fn shorten(&self, raw_url: &str) -> Result<(ShortLink, String), AppError> {
        validate_target_url(raw_url)?;

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = self.generator.generate();
            let new_link = NewShortLink {
                code,
                long_url: raw_url.to_string(),
            };

            match self.repository.insert(new_link).await {
                Ok(link) => {
                    let short_url = self.short_url(&link.code);
                    tracing::info!(code = %link.code, long_url = %link.long_url, "URL shortened");
                    return Ok((link, short_url));
                }
                Err(AppError::AlreadyExists { code }) => {
                    tracing::warn!(code = %code, "generated code already taken, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::GenerationExhausted)
    }

    /// Resolves a short code to its original URL.
    ///
    /// The hit count update is best-effort: a failure to increment is
    /// logged but never blocks returning the URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never issued.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound {
                code: code.to_string(),
            })?;

        if let Err(e) = self.repository.record_hit(code).await {
            tracing::warn!(code, error = %e, "failed to record hit");
        }

        Ok(link.long_url)
    }

    /// Number of links currently stored. Serves health and metrics.
    pub async fn store_size(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    /// Composes the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
