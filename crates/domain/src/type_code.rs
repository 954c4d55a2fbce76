//! Numeric type codes identifying sensor and actuator kinds.
//!
//! Codes are open: any `i32` is a valid [`TypeCode`], the constants below are
//! only the ones the reference device ships with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type identifier of a sensor or actuator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TypeCode(i32);

impl TypeCode {
    /// Unset / unknown type.
    pub const DEFAULT: Self = Self(0);

    /// Heating, ventilation and air conditioning actuator.
    pub const HVAC_ACTUATOR: Self = Self(1001);
    /// Humidifier actuator.
    pub const HUMIDIFIER_ACTUATOR: Self = Self(1002);

    /// Relative humidity sensor.
    pub const HUMIDITY_SENSOR: Self = Self(1010);
    /// Barometric pressure sensor.
    pub const PRESSURE_SENSOR: Self = Self(1012);
    /// Temperature sensor.
    pub const TEMP_SENSOR: Self = Self(1013);

    /// Wrap a raw code.
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Access the raw code.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
