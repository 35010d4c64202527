//! Custom middleware implementations for the API.
//!
//! Request IDs with per-request logging, and request metrics.

pub mod metrics;
pub mod request_id;

pub use metrics::*;
pub use request_id::*;
