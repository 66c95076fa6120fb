//! In-memory implementation of the link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-memory link store backed by `DashMap`.
///
/// DashMap's sharded locking lets operations on different codes proceed
/// without contending on a single global lock. Insert-if-absent goes
/// through the entry API, so concurrent inserts for the same code resolve
/// to exactly one winner while the loser observes
/// [`AppError::AlreadyExists`].
///
/// Links are never removed; the store is the sole source of truth for
/// which short links exist for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, ShortLink>,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::AlreadyExists {
                code: new_link.code,
            }),
            Entry::Vacant(entry) => {
                let link = ShortLink::new(new_link.code, new_link.long_url);
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.clone()))
    }

    async fn record_hit(&self, code: &str) -> Result<u64, AppError> {
        match self.links.get_mut(code) {
            Some(mut entry) => {
                entry.hit_count += 1;
                Ok(entry.hit_count)
            }
            None => Err(AppError::NotFound {
                code: code.to_string(),
            }),
        }
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(code: &str, url: &str) -> NewShortLink {
        NewShortLink {
            code: code.to_string(),
            long_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryLinkRepository::new();

        repo.insert(new_link("abc123", "https://example.com"))
            .await
            .unwrap();

        let link = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.hit_count, 0);
    }

    #[tokio::test]
    async fn test_find_nonexistent() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.find_by_code("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_never_overwrites() {
        let repo = MemoryLinkRepository::new();

        repo.insert(new_link("abc123", "https://example.com"))
            .await
            .unwrap();

        let err = repo
            .insert(new_link("abc123", "https://other.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists { .. }));

        // Original mapping is untouched.
        let link = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(link.long_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_record_hit_increments() {
        let repo = MemoryLinkRepository::new();
        repo.insert(new_link("abc123", "https://example.com"))
            .await
            .unwrap();

        assert_eq!(repo.record_hit("abc123").await.unwrap(), 1);
        assert_eq!(repo.record_hit("abc123").await.unwrap(), 2);
        assert_eq!(repo.record_hit("abc123").await.unwrap(), 3);

        let link = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(link.hit_count, 3);
    }

    #[tokio::test]
    async fn test_record_hit_unknown_code() {
        let repo = MemoryLinkRepository::new();
        let err = repo.record_hit("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_count() {
        let repo = MemoryLinkRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(new_link("a11111", "https://example.com/1"))
            .await
            .unwrap();
        repo.insert(new_link("b22222", "https://example.com/2"))
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_insert_same_code_single_winner() {
        use std::sync::Arc;

        let repo = Arc::new(MemoryLinkRepository::new());
        let mut handles = Vec::new();

        for i in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.insert(new_link("race01", &format!("https://example.com/{i}")))
                    .await
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
