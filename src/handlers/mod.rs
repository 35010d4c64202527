//! HTTP request handlers for API endpoints.

pub mod health;
pub mod metrics;
pub mod openapi;
pub mod version;
pub mod windchill;

pub use health::*;
pub use metrics::*;
pub use openapi::*;
pub use version::*;
pub use windchill::*;
