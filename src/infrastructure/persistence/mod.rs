//! Concrete storage implementations of the repository traits.
//!
//! Persistence is a policy choice behind [`crate::domain::repositories::LinkRepository`];
//! the in-memory store here can be swapped for a disk-backed one without
//! touching the service or handlers.

pub mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
