//! Simulated sensor: replays a generated data set, one sample per poll.

use std::sync::atomic::{AtomicUsize, Ordering};

use edgeagent_app::ports::{TelemetrySource, TypedAdapter};
use edgeagent_domain::error::AdapterError;
use edgeagent_domain::sensor::{
    HUMIDITY_SENSOR_NAME, PRESSURE_SENSOR_NAME, SensorRecord, TEMP_SENSOR_NAME,
};
use edgeagent_domain::type_code::TypeCode;

use crate::generator::{
    HI_NORMAL_ENV_HUMIDITY, HI_NORMAL_ENV_PRESSURE, HI_NORMAL_INDOOR_TEMP, LOW_NORMAL_ENV_HUMIDITY,
    LOW_NORMAL_ENV_PRESSURE, LOW_NORMAL_INDOOR_TEMP,
};

/// A telemetry source backed by a fixed data set.
///
/// Each call to [`generate_telemetry`](TelemetrySource::generate_telemetry)
/// returns the next sample, wrapping around at the end. An empty data set
/// yields a constant fallback value.
pub struct SimulatedSensor {
    name: String,
    type_code: TypeCode,
    data: Vec<f64>,
    fallback: f64,
    cursor: AtomicUsize,
}

impl SimulatedSensor {
    /// Create a sensor replaying `data`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        type_code: TypeCode,
        data: Vec<f64>,
        fallback: f64,
    ) -> Self {
        Self {
            name: name.into(),
            type_code,
            data,
            fallback,
            cursor: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn temperature(data: Vec<f64>) -> Self {
        Self::new(
            TEMP_SENSOR_NAME,
            TypeCode::TEMP_SENSOR,
            data,
            f64::midpoint(LOW_NORMAL_INDOOR_TEMP, HI_NORMAL_INDOOR_TEMP),
        )
    }

    #[must_use]
    pub fn humidity(data: Vec<f64>) -> Self {
        Self::new(
            HUMIDITY_SENSOR_NAME,
            TypeCode::HUMIDITY_SENSOR,
            data,
            f64::midpoint(LOW_NORMAL_ENV_HUMIDITY, HI_NORMAL_ENV_HUMIDITY),
        )
    }

    #[must_use]
    pub fn pressure(data: Vec<f64>) -> Self {
        Self::new(
            PRESSURE_SENSOR_NAME,
            TypeCode::PRESSURE_SENSOR,
            data,
            f64::midpoint(LOW_NORMAL_ENV_PRESSURE, HI_NORMAL_ENV_PRESSURE),
        )
    }

    fn next_value(&self) -> f64 {
        let len = self.data.len();
        if len == 0 {
            return self.fallback;
        }
        let advance = |i: usize| Some((i + 1) % len);
        let index = self
            .cursor
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, advance)
            .unwrap_or_default();
        self.data[index % len]
    }
}

impl TypedAdapter for SimulatedSensor {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_code(&self) -> TypeCode {
        self.type_code
    }
}

impl TelemetrySource for SimulatedSensor {
    fn generate_telemetry(&self) -> Result<SensorRecord, AdapterError> {
        let value = self.next_value();
        Ok(SensorRecord::new(self.name.clone(), self.type_code, value))
    }
}
