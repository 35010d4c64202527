//! Request and response models for the windchill endpoint.

use crate::services::windchill::FeltTemperature;
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Raw query parameters of `GET /windchill/v1/berechnung`
///
/// Both values are kept as strings so that missing and non-numeric input
/// can be reported with a precise message instead of a generic
/// deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct WindChillQuery {
    /// Actual air temperature in degrees Celsius (-50.0 to 10.0)
    pub pt: Option<String>,
    /// Wind speed in km/h (5.0 to 60.0)
    pub wg: Option<String>,
}

/// Response model for the windchill endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct WindChillResponse {
    /// Actual air temperature as requested, in degrees Celsius
    #[serde(rename = "tatsaechlicheTemperatur")]
    pub actual_temperature_celsius: f64,
    /// Wind speed as requested, in km/h
    #[serde(rename = "windgeschwindigkeit")]
    pub wind_speed_kmh: f64,
    /// Felt temperature in degrees Celsius
    #[serde(rename = "gefuehlteTemperatur")]
    pub felt_temperature_celsius: f64,
}

impl From<FeltTemperature> for WindChillResponse {
    fn from(result: FeltTemperature) -> Self {
        Self {
            actual_temperature_celsius: result.actual_temperature_celsius,
            wind_speed_kmh: result.wind_speed_kmh,
            felt_temperature_celsius: result.felt_temperature_celsius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_field_names() {
        let response = WindChillResponse {
            actual_temperature_celsius: 1.0,
            wind_speed_kmh: 25.0,
            felt_temperature_celsius: -4.0,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"tatsaechlicheTemperatur":1.0,"windgeschwindigkeit":25.0,"gefuehlteTemperatur":-4.0}"#
        );
    }
}
