//! Simulator configuration.

use serde::Deserialize;

use edgeagent_domain::error::ValidationError;

use crate::generator::{
    HI_NORMAL_ENV_HUMIDITY, HI_NORMAL_ENV_PRESSURE, HI_NORMAL_INDOOR_TEMP, LOW_NORMAL_ENV_HUMIDITY,
    LOW_NORMAL_ENV_PRESSURE, LOW_NORMAL_INDOOR_TEMP, SAMPLES_PER_DAY,
};

/// Value ranges and resolution of the simulated data sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Lowest simulated indoor temperature, in °C.
    pub temp_floor: f64,
    /// Highest simulated indoor temperature, in °C.
    pub temp_ceiling: f64,
    /// Lowest simulated relative humidity, in %.
    pub humidity_floor: f64,
    /// Highest simulated relative humidity, in %.
    pub humidity_ceiling: f64,
    /// Lowest simulated barometric pressure, in hPa.
    pub pressure_floor: f64,
    /// Highest simulated barometric pressure, in hPa.
    pub pressure_ceiling: f64,
    /// Number of samples generated for one simulated day.
    pub samples_per_day: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            temp_floor: LOW_NORMAL_INDOOR_TEMP,
            temp_ceiling: HI_NORMAL_INDOOR_TEMP,
            humidity_floor: LOW_NORMAL_ENV_HUMIDITY,
            humidity_ceiling: HI_NORMAL_ENV_HUMIDITY,
            pressure_floor: LOW_NORMAL_ENV_PRESSURE,
            pressure_ceiling: HI_NORMAL_ENV_PRESSURE,
            samples_per_day: SAMPLES_PER_DAY,
        }
    }
}

/// Simulator configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum SimConfigError {
    /// A floor/ceiling pair is malformed.
    #[error("invalid {quantity} range")]
    Range {
        quantity: &'static str,
        #[source]
        source: ValidationError,
    },
    /// A day needs at least one sample.
    #[error("samples_per_day must be positive")]
    NoSamples,
}

impl SimConfig {
    /// Check every range is well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`SimConfigError`] for the first malformed setting.
    pub fn validate(&self) -> Result<(), SimConfigError> {
        check_range("temperature", self.temp_floor, self.temp_ceiling)?;
        check_range("humidity", self.humidity_floor, self.humidity_ceiling)?;
        check_range("pressure", self.pressure_floor, self.pressure_ceiling)?;
        if self.samples_per_day == 0 {
            return Err(SimConfigError::NoSamples);
        }
        Ok(())
    }
}

fn check_range(quantity: &'static str, floor: f64, ceiling: f64) -> Result<(), SimConfigError> {
    let source = if !floor.is_finite() || !ceiling.is_finite() {
        ValidationError::NonFiniteBound
    } else if floor > ceiling {
        ValidationError::InvertedRange { floor, ceiling }
    } else {
        return Ok(());
    };
    Err(SimConfigError::Range { quantity, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = SimConfig::default();
        assert!((config.temp_floor - 18.0).abs() < f64::EPSILON);
        assert!((config.temp_ceiling - 22.0).abs() < f64::EPSILON);
        assert_eq!(config.samples_per_day, 1440);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let config: SimConfig = toml::from_str("humidity_floor = 30.0").unwrap();
        assert!((config.humidity_floor - 30.0).abs() < f64::EPSILON);
        assert!((config.humidity_ceiling - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_reject_inverted_range() {
        let config = SimConfig {
            pressure_floor: 1100.0,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid pressure range");
    }

    #[test]
    fn should_reject_zero_samples() {
        let config = SimConfig {
            samples_per_day: 0,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimConfigError::NoSamples)));
    }
}
