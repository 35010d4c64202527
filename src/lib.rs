//! Windchill API - felt temperature as a service
//!
//! An Actix Web service computing the felt (windchill) temperature from an
//! air temperature and a wind speed:
//!
//! ```text
//! GET /windchill/v1/berechnung?pt=1&wg=25
//! {"tatsaechlicheTemperatur":1.0,"windgeschwindigkeit":25.0,"gefuehlteTemperatur":-4.0}
//! ```
//!
//! ## Architecture
//!
//! - `services/` - the windchill calculation and Prometheus metrics
//! - `handlers/` - HTTP handlers and the app factory
//! - `models/` - request/response models
//! - `error` - mapping of domain errors onto HTTP responses
//! - `middleware/` - request IDs, request logging and metrics
//! - `config/` - environment-driven configuration
//! - `telemetry` - tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```no_run
//! use actix_web::HttpServer;
//! use windchill_api::{create_app, AppConfig, AppMetrics};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = AppConfig::default();
//!     let metrics = AppMetrics::new().map_err(std::io::Error::other)?;
//!     HttpServer::new(move || create_app(&config, metrics.clone()))
//!         .bind(("127.0.0.1", 8080))?
//!         .run()
//!         .await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{AppConfig, LogFormat, LoggingConfig, MetricsConfig, ServerConfig, WindChillConfig};
pub use error::ApiError;
pub use handlers::{
    OPENAPI_ROUTE, WINDCHILL_ROUTE, create_app, create_openapi_spec, get_metrics, health, version,
    windchill,
};
pub use middleware::{MetricsMiddleware, RequestIdMiddleware};
pub use models::{ErrorResponse, HealthResponse, VersionResponse, WindChillQuery, WindChillResponse};
pub use services::{
    AppMetrics, CalculationOutcome, FeltTemperature, Rounding, WindChillCalculator, WindChillError,
    compute_felt_temperature,
};
