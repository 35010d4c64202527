//! Configuration structures and loading utilities.
//!
//! Every section is loaded from environment variables with a default for
//! each value, so the service starts without any configuration at all.

pub mod logging;
pub mod metrics;
pub mod server;
pub mod windchill;

pub use logging::*;
pub use metrics::*;
pub use server::*;
pub use windchill::*;

/// Complete runtime configuration of the service
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
    pub logging: LoggingConfig,
    pub windchill: WindChillConfig,
}

impl AppConfig {
    /// Load every configuration section from the environment
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            metrics: MetricsConfig::from_env(),
            logging: LoggingConfig::from_env(),
            windchill: WindChillConfig::from_env(),
        }
    }
}
