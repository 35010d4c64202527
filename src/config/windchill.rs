//! Windchill calculation configuration.

use crate::services::windchill::Rounding;
use std::env;

/// Configuration for the felt-temperature calculator
#[derive(Clone, Debug, Default)]
pub struct WindChillConfig {
    pub rounding: Rounding,
}

impl WindChillConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// An unrecognised `WINDCHILL_ROUNDING` value is logged and ignored.
    pub fn from_env() -> Self {
        let rounding = match env::var("WINDCHILL_ROUNDING") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!(value = %value, error = %e, "Ignoring WINDCHILL_ROUNDING");
                Rounding::default()
            }),
            Err(_) => Rounding::default(),
        };

        Self { rounding }
    }
}
