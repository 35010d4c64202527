//! Business logic and service layer modules.
//!
//! `windchill` holds the felt-temperature calculation; `metrics` owns the
//! Prometheus collectors shared by the middleware and handlers.

pub mod metrics;
pub mod windchill;

pub use metrics::*;
pub use windchill::*;
