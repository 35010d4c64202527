//! Health check endpoint handler.

use crate::models::HealthResponse;
use actix_web::web;
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// The service has no backing dependencies, so being able to answer is
/// the whole health signal.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the API in JSON format.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
