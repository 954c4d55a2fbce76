//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `edgeagent.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.
//!
//! Poll interval and location are not validated here: the
//! managers substitute their defaults for unusable values.

use serde::Deserialize;

use edgeagent_adapter_sim::{SimConfig, SimConfigError};
use edgeagent_domain::error::ValidationError;
use edgeagent_domain::threshold::ThresholdRule;
use edgeagent_domain::type_code::TypeCode;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device identity and polling settings.
    pub device: edgeagent_domain::config::DeviceConfig,
    /// Simulated data set settings.
    pub simulation: SimConfig,
    /// Threshold control rules.
    pub control: ControlConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Threshold controller configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Rules evaluated against every sensor record.
    pub rules: Vec<ThresholdRule>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `edgeagent.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// simulation range or control rule is invalid.
    ///
    /// Ignored environment values are returned alongside the configuration
    /// so they can be logged once a subscriber is installed.
    pub fn load() -> Result<(Self, Vec<OverrideWarning>), ConfigError> {
        let mut config = Self::from_file("edgeagent.toml")?;
        let warnings = config.apply_env_overrides();
        config.validate()?;
        Ok((config, warnings))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Vec<OverrideWarning> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Vec<OverrideWarning> {
        let mut warnings = Vec::new();
        if let Some(val) = lookup("EDGEAGENT_POLL_INTERVAL") {
            match val.trim().parse() {
                Ok(secs) => self.device.poll_interval_secs = secs,
                Err(_) => warnings.push(OverrideWarning::PollInterval(val)),
            }
        }
        if let Some(val) = lookup("EDGEAGENT_LOCATION_ID") {
            self.device.location_id = val;
        }
        if let Some(val) = lookup("EDGEAGENT_ENABLE_EMULATOR") {
            match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.device.enable_emulator = true,
                "0" | "false" | "no" | "off" => self.device.enable_emulator = false,
                _ => warnings.push(OverrideWarning::EmulatorFlag(val)),
            }
        }
        if let Some(val) = lookup("EDGEAGENT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        warnings
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        for rule in &self.control.rules {
            rule.validate().map_err(|source| ConfigError::Rule {
                sensor_type: rule.sensor_type,
                source,
            })?;
        }
        Ok(())
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                ThresholdRule {
                    sensor_type: TypeCode::HUMIDITY_SENSOR,
                    actuator_type: TypeCode::HUMIDIFIER_ACTUATOR,
                    floor: 35.0,
                    ceiling: 45.0,
                },
                ThresholdRule {
                    sensor_type: TypeCode::TEMP_SENSOR,
                    actuator_type: TypeCode::HVAC_ACTUATOR,
                    floor: 18.0,
                    ceiling: 22.0,
                },
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "edgeagentd=info,edgeagent_app=info,edgeagent_adapter_sim=info".to_string(),
        }
    }
}

/// An environment override that was ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverrideWarning {
    #[error("ignoring non-numeric poll interval {0:?}")]
    PollInterval(String),
    #[error("ignoring unrecognised emulator flag {0:?}")]
    EmulatorFlag(String),
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Malformed simulation settings.
    #[error("invalid simulation settings")]
    Simulation(#[from] SimConfigError),
    /// Malformed threshold rule.
    #[error("invalid control rule for sensor type {sensor_type}")]
    Rule {
        sensor_type: TypeCode,
        #[source]
        source: ValidationError,
    },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.device.poll_interval_secs, 60);
        assert_eq!(config.device.location_id, "constraineddevice001");
        assert!(!config.device.enable_emulator);
        assert_eq!(config.simulation.samples_per_day, 1440);
        assert_eq!(config.control.rules.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.device.poll_interval_secs, 60);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [device]
            poll_interval_secs = 5
            location_id = 'greenhouse'
            enable_emulator = true

            [simulation]
            temp_floor = 15.0
            temp_ceiling = 25.0
            samples_per_day = 24

            [[control.rules]]
            sensor_type = 1012
            actuator_type = 1001
            floor = 995.0
            ceiling = 1005.0

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.device.poll_interval_secs, 5);
        assert_eq!(config.device.location_id, "greenhouse");
        assert!(config.device.enable_emulator);
        assert!((config.simulation.temp_floor - 15.0).abs() < f64::EPSILON);
        assert_eq!(config.simulation.samples_per_day, 24);
        assert_eq!(config.control.rules.len(), 1);
        assert_eq!(
            config.control.rules[0].sensor_type,
            TypeCode::PRESSURE_SENSOR
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [device]
            location_id = 'X'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.device.location_id, "X");
        assert_eq!(config.device.poll_interval_secs, 60);
        assert_eq!(config.control.rules.len(), 2);
    }

    #[test]
    fn should_keep_non_positive_interval_for_manager_to_correct() {
        let config: Config = toml::from_str("[device]\npoll_interval_secs = -3").unwrap();
        assert!(config.validate().is_ok());
        assert!(config.device.poll_interval().is_none());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.device.poll_interval_secs, 60);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_samples() {
        let mut config = Config::default();
        config.simulation.samples_per_day = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Simulation(SimConfigError::NoSamples))
        ));
    }

    #[test]
    fn should_reject_inverted_rule() {
        let mut config = Config::default();
        config.control.rules[0].floor = 50.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid control rule for sensor type 1010");
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("EDGEAGENT_POLL_INTERVAL", "15"),
            ("EDGEAGENT_LOCATION_ID", "lab"),
            ("EDGEAGENT_ENABLE_EMULATOR", "true"),
            ("EDGEAGENT_LOG", "trace"),
        ]));
        assert_eq!(config.device.poll_interval_secs, 15);
        assert_eq!(config.device.location_id, "lab");
        assert!(config.device.enable_emulator);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_prefer_rust_log_over_edgeagent_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("EDGEAGENT_LOG", "trace"), ("RUST_LOG", "warn")]));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_ignore_malformed_env_values() {
        let mut config = Config::default();
        let warnings = config.apply_overrides(env(&[
            ("EDGEAGENT_POLL_INTERVAL", "soon"),
            ("EDGEAGENT_ENABLE_EMULATOR", "maybe"),
        ]));
        assert_eq!(config.device.poll_interval_secs, 60);
        assert!(!config.device.enable_emulator);
        assert_eq!(
            warnings,
            [
                OverrideWarning::PollInterval("soon".to_string()),
                OverrideWarning::EmulatorFlag("maybe".to_string()),
            ]
        );
        assert_eq!(
            warnings[0].to_string(),
            "ignoring non-numeric poll interval \"soon\""
        );
    }

    #[test]
    fn should_report_no_warnings_for_valid_overrides() {
        let mut config = Config::default();
        let warnings = config.apply_overrides(env(&[
            ("EDGEAGENT_POLL_INTERVAL", " 30 "),
            ("EDGEAGENT_ENABLE_EMULATOR", "off"),
        ]));
        assert!(warnings.is_empty());
        assert_eq!(config.device.poll_interval_secs, 30);
    }
}
