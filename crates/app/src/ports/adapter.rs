//! Adapter ports: telemetry sources and actuators.
//!
//! Both kinds of adapter are identified by a [`TypeCode`], which is how the
//! [`AdapterRegistry`](crate::registry::AdapterRegistry) keys them. Calls are
//! synchronous and take `&self`: implementations that keep state use interior
//! mutability so one instance can be shared between the timer task and
//! caller threads.

use edgeagent_domain::actuator::{ActuatorCommand, ActuatorResponse};
use edgeagent_domain::error::AdapterError;
use edgeagent_domain::sensor::SensorRecord;
use edgeagent_domain::type_code::TypeCode;

/// Identity shared by every adapter.
pub trait TypedAdapter: Send + Sync {
    /// Human-readable adapter name, e.g. `"TempSensor"`.
    fn name(&self) -> &str;

    /// The type code this adapter is registered under.
    fn type_code(&self) -> TypeCode;
}

/// Produces one reading per call.
pub trait TelemetrySource: TypedAdapter {
    /// Sample the sensor.
    ///
    /// Must not block indefinitely. The returned record carries an unset
    /// location; the scheduler stamps it.
    ///
    /// # Errors
    ///
    /// Returns an [`AdapterError`] when the sensor cannot be read.
    fn generate_telemetry(&self) -> Result<SensorRecord, AdapterError>;
}

/// Applies commands to a physical or simulated device.
pub trait Actuator: TypedAdapter {
    /// Apply `command` and describe the outcome.
    ///
    /// `Ok(None)` means the actuator declined to produce a response (for
    /// instance because the command targets another type).
    ///
    /// # Errors
    ///
    /// Returns an [`AdapterError`] when the device fails.
    fn update_actuator(
        &self,
        command: &ActuatorCommand,
    ) -> Result<Option<ActuatorResponse>, AdapterError>;
}
