//! Listener port: the single observer notified of telemetry and responses.

use edgeagent_domain::actuator::ActuatorResponse;
use edgeagent_domain::sensor::SensorRecord;

/// Receives telemetry records and actuator command responses.
///
/// The return value reports whether the listener accepted the message. The
/// managers log a rejection but never retry.
pub trait DataMessageListener: Send + Sync {
    /// Handle a freshly polled telemetry record.
    fn handle_sensor_message(&self, record: &SensorRecord) -> bool;

    /// Handle the response an actuator gave to a command.
    fn handle_actuator_command_response(&self, response: &ActuatorResponse) -> bool;
}
