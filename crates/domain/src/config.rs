//! Device configuration consumed by the adapter managers.
//!
//! Values arrive unvalidated from the configuration loader. The managers do
//! not fail on bad values: they ask for the validated form and fall back to
//! the documented defaults when it is absent.

use std::time::Duration;

use serde::Deserialize;

use crate::location::LocationId;

/// Poll interval, in seconds, used when the configured one is not positive.
pub const DEFAULT_POLL_CYCLES: u64 = 60;

/// Location used by the shipped configuration.
pub const DEFAULT_LOCATION_ID: &str = "constraineddevice001";

/// Which family of adapters backs the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterMode {
    /// Software simulators fed by generated data sets.
    Simulator,
    /// Emulated hardware.
    Emulator,
}

/// Per-device settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Seconds between two telemetry polls. Must be positive.
    pub poll_interval_secs: i64,
    /// Location this device is deployed at.
    pub location_id: String,
    /// Use emulated hardware instead of simulators.
    pub enable_emulator: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 60,
            location_id: DEFAULT_LOCATION_ID.to_string(),
            enable_emulator: false,
        }
    }
}

impl DeviceConfig {
    /// The poll interval, or `None` when the configured value is not positive.
    #[must_use]
    pub fn poll_interval(&self) -> Option<Duration> {
        u64::try_from(self.poll_interval_secs)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// The location, or `None` when the configured value is blank.
    #[must_use]
    pub fn location(&self) -> Option<LocationId> {
        let location = LocationId::new(self.location_id.clone());
        (!location.is_blank()).then_some(location)
    }

    #[must_use]
    pub fn mode(&self) -> AdapterMode {
        if self.enable_emulator {
            AdapterMode::Emulator
        } else {
            AdapterMode::Simulator
        }
    }
}
