//! Data models for the Windchill API.
//!
//! Request and response types serialized at the HTTP boundary.

pub mod api;
pub mod windchill;

pub use api::*;
pub use windchill::*;
