//! # edgeagent-adapter-sim
//!
//! Simulator integration that provides software sensors and actuators for
//! running the agent without hardware.
//!
//! ## Provided devices
//!
//! | Device | Type code | Behaviour |
//! |--------|-----------|-----------|
//! | `TempSensor` | 1013 | Replays a generated daily indoor temperature curve |
//! | `PressureSensor` | 1012 | Replays a generated daily pressure curve |
//! | `HumiditySensor` | 1010 | Replays a generated daily humidity curve |
//! | `HvacActuator` | 1001 | Logs `ON` / `OFF` commands |
//! | `HumidifierActuator` | 1002 | Logs `ON` / `OFF` commands |
//!
//! ## Dependency rule
//!
//! Depends on `edgeagent-app` (port traits) and `edgeagent-domain` only.

mod config;
mod devices;
pub mod generator;

pub use config::{SimConfig, SimConfigError};
pub use devices::{SimulatedActuator, SimulatedSensor};

use edgeagent_app::registry::{ActuatorRegistry, SensorRegistry};

/// Build the three simulated sensors, each replaying one generated day.
///
/// # Errors
///
/// Returns [`SimConfigError`] when `config` does not validate.
pub fn sensors(config: &SimConfig) -> Result<SensorRegistry, SimConfigError> {
    config.validate()?;
    let samples = config.samples_per_day;
    let registry = SensorRegistry::new()
        .with(Box::new(SimulatedSensor::temperature(
            generator::daily_indoor_temperature(config.temp_floor, config.temp_ceiling, samples),
        )))
        .with(Box::new(SimulatedSensor::pressure(
            generator::daily_environment_pressure(
                config.pressure_floor,
                config.pressure_ceiling,
                samples,
            ),
        )))
        .with(Box::new(SimulatedSensor::humidity(
            generator::daily_environment_humidity(
                config.humidity_floor,
                config.humidity_ceiling,
                samples,
            ),
        )));
    Ok(registry)
}

/// Build the simulated HVAC and humidifier actuators.
#[must_use]
pub fn actuators() -> ActuatorRegistry {
    ActuatorRegistry::new()
        .with(Box::new(SimulatedActuator::hvac()))
        .with(Box::new(SimulatedActuator::humidifier()))
}
