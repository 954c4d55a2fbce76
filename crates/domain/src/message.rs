//! Data messages: the envelope delivered to listeners on the message bus.

use serde::{Deserialize, Serialize};

use crate::actuator::ActuatorResponse;
use crate::sensor::SensorRecord;

/// Anything a listener can be notified about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum DataMessage {
    /// A fresh telemetry record.
    Sensor(SensorRecord),
    /// The response an actuator gave to a command.
    ActuatorResponse(ActuatorResponse),
}

impl From<SensorRecord> for DataMessage {
    fn from(record: SensorRecord) -> Self {
        Self::Sensor(record)
    }
}

impl From<ActuatorResponse> for DataMessage {
    fn from(response: ActuatorResponse) -> Self {
        Self::ActuatorResponse(response)
    }
}
