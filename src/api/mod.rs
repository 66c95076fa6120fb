//! HTTP API layer.
//!
//! Translates HTTP requests into service operations and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, rate limiting and security headers

pub mod dto;
pub mod handlers;
pub mod middleware;
