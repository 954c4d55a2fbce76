//! Threshold rules: the band a sensor reading should stay within and the
//! actuator that brings it back.

use serde::Deserialize;

use crate::error::ValidationError;
use crate::type_code::TypeCode;

/// Where a reading sits relative to a rule's band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Band {
    Below,
    #[default]
    Within,
    Above,
}

/// Keep readings of `sensor_type` within `[floor, ceiling]` by driving
/// `actuator_type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThresholdRule {
    pub sensor_type: TypeCode,
    pub actuator_type: TypeCode,
    pub floor: f64,
    pub ceiling: f64,
}

impl ThresholdRule {
    /// Check the band is well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for non-finite bounds or a floor above the
    /// ceiling.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.floor.is_finite() || !self.ceiling.is_finite() {
            return Err(ValidationError::NonFiniteBound);
        }
        if self.floor > self.ceiling {
            return Err(ValidationError::InvertedRange {
                floor: self.floor,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }

    /// Position of `value` relative to the band. `NaN` compares as within,
    /// so callers screen out non-finite readings first.
    #[must_use]
    pub fn classify(&self, value: f64) -> Band {
        if value < self.floor {
            Band::Below
        } else if value > self.ceiling {
            Band::Above
        } else {
            Band::Within
        }
    }

    /// Midpoint of the band, the value actuators are asked to reach.
    #[must_use]
    pub fn target(&self) -> f64 {
        f64::midpoint(self.floor, self.ceiling)
    }
}
