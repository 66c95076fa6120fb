//! # snaplink
//!
//! A small URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a layered layout with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - The `ShortLink` entity and the
//!   `LinkRepository` storage contract
//! - **Application Layer** ([`application`]) - The link service handling
//!   shortening and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and
//!   the metrics registry
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Counter-based base-62 short codes: unique by construction, no
//!   collision retry loops
//! - Atomic insert-if-absent mapping store
//! - 302 redirects with per-link hit counting
//! - Health probe and Prometheus-format metrics
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://s.example.com"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{NewShortLink, ShortLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
