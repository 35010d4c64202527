//! Utility functions for inspecting incoming requests.

pub mod http;
pub mod route;

pub use http::*;
pub use route::*;
