//! Version information endpoint handler.

use crate::models::VersionResponse;
use actix_web::web;
use paperclip::actix::api_v2_operation;

impl VersionResponse {
    /// Version data baked in at compile time by Cargo and `build.rs`
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("VERGEN_GIT_SHA")
                .unwrap_or("unknown")
                .to_string(),
            build_time: option_env!("VERGEN_BUILD_TIMESTAMP")
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}

/// Version information endpoint
#[api_v2_operation(
    summary = "Version Information Endpoint",
    description = "Returns the current API version, commit hash, and build time.",
    tags("Version"),
    responses(
        (status = 200, description = "Successful response", body = VersionResponse)
    )
)]
pub async fn version() -> web::Json<VersionResponse> {
    web::Json(VersionResponse::current())
}
