//! Infrastructure layer: storage backends and operational counters.

pub mod metrics;
pub mod persistence;
