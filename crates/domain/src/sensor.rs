//! Sensor records: timestamped scalar readings produced by telemetry sources.

use serde::{Deserialize, Serialize};

use crate::location::LocationId;
use crate::time::{Timestamp, now};
use crate::type_code::TypeCode;

/// Canonical name of the temperature sensor.
pub const TEMP_SENSOR_NAME: &str = "TempSensor";
/// Canonical name of the humidity sensor.
pub const HUMIDITY_SENSOR_NAME: &str = "HumiditySensor";
/// Canonical name of the pressure sensor.
pub const PRESSURE_SENSOR_NAME: &str = "PressureSensor";

/// A single reading for a named, typed sensor.
///
/// Records are immutable once emitted: the only way to change the location
/// is [`with_location`](Self::with_location), which consumes the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorRecord {
    name: String,
    type_id: TypeCode,
    value: f64,
    location_id: LocationId,
    timestamp: Timestamp,
}

impl SensorRecord {
    /// Create a reading timestamped now, with an unset location.
    #[must_use]
    pub fn new(name: impl Into<String>, type_id: TypeCode, value: f64) -> Self {
        Self {
            name: name.into(),
            type_id,
            value,
            location_id: LocationId::default(),
            timestamp: now(),
        }
    }

    /// Stamp the location the reading was taken at.
    #[must_use]
    pub fn with_location(mut self, location_id: LocationId) -> Self {
        self.location_id = location_id;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn type_id(&self) -> TypeCode {
        self.type_id
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn location_id(&self) -> &LocationId {
        &self.location_id
    }

    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
