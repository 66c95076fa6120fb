//! Request processing middleware.

pub mod rate_limit;
pub mod security;
pub mod tracing;
