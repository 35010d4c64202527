//! Felt-temperature (windchill) calculation.
//!
//! Uses the formula of the Joint Action Group for Temperature Indices
//! (JAG/TI), valid for air temperatures between -50 °C and 10 °C and wind
//! speeds between 5 km/h and 60 km/h:
//!
//! ```text
//! felt = 13.12 + 0.6215 * t + (0.3965 * t - 11.37) * v^0.16
//! ```

use std::{fmt, ops::RangeInclusive, str::FromStr};

/// Valid air temperature range in degrees Celsius
pub const TEMPERATURE_RANGE_CELSIUS: RangeInclusive<f64> = -50.0..=10.0;

/// Valid wind speed range in km/h
pub const WIND_SPEED_RANGE_KMH: RangeInclusive<f64> = 5.0..=60.0;

/// Range violations reported by the calculator
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindChillError {
    #[error(
        "Actual temperature {value:?} °C is outside the valid range of {min:?} °C to {max:?} °C"
    )]
    TemperatureOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Wind speed {value:?} km/h is outside the valid range of {min:?} km/h to {max:?} km/h")]
    WindSpeedOutOfRange { value: f64, min: f64, max: f64 },
}

impl WindChillError {
    /// Name of the input that violated its range
    pub fn input(&self) -> &'static str {
        match self {
            WindChillError::TemperatureOutOfRange { .. } => "actual_temperature_celsius",
            WindChillError::WindSpeedOutOfRange { .. } => "wind_speed_kmh",
        }
    }

    /// The rejected value
    pub fn value(&self) -> f64 {
        match self {
            WindChillError::TemperatureOutOfRange { value, .. }
            | WindChillError::WindSpeedOutOfRange { value, .. } => *value,
        }
    }
}

/// How the raw formula result is reduced to the reported value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Round half up to whole tenths, then integer-divide the tenths by ten.
    ///
    /// The result always has a zero fractional part (`-4.62` becomes `-4.0`).
    /// This matches the published responses of the v1 endpoint.
    #[default]
    Legacy,
    /// Round half away from zero to one decimal place (`-4.62` becomes `-4.6`).
    Tenths,
}

impl Rounding {
    /// Apply this rounding rule to a raw felt temperature
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Legacy => {
                let tenths = (value * 10.0 + 0.5).floor() as i64;
                (tenths / 10) as f64
            }
            Rounding::Tenths => (value * 10.0).round() / 10.0,
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::Legacy => f.write_str("legacy"),
            Rounding::Tenths => f.write_str("tenths"),
        }
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(Rounding::Legacy),
            "tenths" => Ok(Rounding::Tenths),
            other => Err(format!(
                "unknown rounding mode '{other}', expected 'legacy' or 'tenths'"
            )),
        }
    }
}

/// Result of a successful calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeltTemperature {
    pub actual_temperature_celsius: f64,
    pub wind_speed_kmh: f64,
    pub felt_temperature_celsius: f64,
}

/// Stateless felt-temperature calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct WindChillCalculator {
    rounding: Rounding,
}

impl WindChillCalculator {
    /// Create a calculator using the given rounding rule
    pub fn new(rounding: Rounding) -> Self {
        Self { rounding }
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Compute the felt temperature for the given air temperature and wind speed.
    ///
    /// The temperature is validated before the wind speed; when both are out
    /// of range only the temperature violation is reported.
    pub fn calculate(
        &self,
        actual_temperature_celsius: f64,
        wind_speed_kmh: f64,
    ) -> Result<FeltTemperature, WindChillError> {
        if !TEMPERATURE_RANGE_CELSIUS.contains(&actual_temperature_celsius) {
            let error = WindChillError::TemperatureOutOfRange {
                value: actual_temperature_celsius,
                min: *TEMPERATURE_RANGE_CELSIUS.start(),
                max: *TEMPERATURE_RANGE_CELSIUS.end(),
            };
            log_violation(&error);
            return Err(error);
        }

        if !WIND_SPEED_RANGE_KMH.contains(&wind_speed_kmh) {
            let error = WindChillError::WindSpeedOutOfRange {
                value: wind_speed_kmh,
                min: *WIND_SPEED_RANGE_KMH.start(),
                max: *WIND_SPEED_RANGE_KMH.end(),
            };
            log_violation(&error);
            return Err(error);
        }

        let v = wind_speed_kmh.powf(0.16);
        let t = actual_temperature_celsius;
        let felt = 13.12 + 0.6215 * t + (0.3965 * t - 11.37) * v;

        Ok(FeltTemperature {
            actual_temperature_celsius,
            wind_speed_kmh,
            felt_temperature_celsius: self.rounding.apply(felt),
        })
    }
}

/// Compute the felt temperature with the default rounding rule
pub fn compute_felt_temperature(
    actual_temperature_celsius: f64,
    wind_speed_kmh: f64,
) -> Result<FeltTemperature, WindChillError> {
    WindChillCalculator::default().calculate(actual_temperature_celsius, wind_speed_kmh)
}

fn log_violation(error: &WindChillError) {
    let (min, max) = match error {
        WindChillError::TemperatureOutOfRange { min, max, .. }
        | WindChillError::WindSpeedOutOfRange { min, max, .. } => (*min, *max),
    };
    tracing::error!(
        input = error.input(),
        value = error.value(),
        min,
        max,
        "{}",
        error
    );
}
