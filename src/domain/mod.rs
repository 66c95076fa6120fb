//! Domain layer: business entities and storage contracts.
//!
//! This layer has no knowledge of HTTP or any concrete storage backend.

pub mod entities;
pub mod repositories;
