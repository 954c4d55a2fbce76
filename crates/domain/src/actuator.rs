//! Actuator commands and responses.
//!
//! A command flows inbound to the router, which hands it to the actuator
//! registered for its type. The actuator answers with a response of the same
//! shape, flagged as a response and carrying a status code.

use serde::{Deserialize, Serialize};

use crate::location::LocationId;
use crate::time::{Timestamp, now};
use crate::type_code::TypeCode;

/// Canonical name of the HVAC actuator.
pub const HVAC_ACTUATOR_NAME: &str = "HvacActuator";
/// Canonical name of the humidifier actuator.
pub const HUMIDIFIER_ACTUATOR_NAME: &str = "HumidifierActuator";

/// Status code reported by an actuator that applied a command.
pub const STATUS_OK: i32 = 0;
/// Status code reported by an actuator that could not apply a command.
pub const STATUS_FAILED: i32 = -1;

/// Requested actuator state. Serialized as `1` (on) / `0` (off).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Command {
    #[default]
    Off,
    On,
}

impl From<Command> for i32 {
    fn from(command: Command) -> Self {
        match command {
            Command::Off => 0,
            Command::On => 1,
        }
    }
}

impl TryFrom<i32> for Command {
    type Error = UnknownCommand;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            other => Err(UnknownCommand(other)),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
        }
    }
}

/// Raw command value that maps to no [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown actuator command {0}")]
pub struct UnknownCommand(pub i32);

/// An instruction directed at the actuator registered for `type_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorCommand {
    pub type_id: TypeCode,
    pub location_id: LocationId,
    pub command: Command,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_data: Option<String>,
    /// Set on payloads that are themselves responses; routers drop them.
    #[serde(default)]
    pub is_response: bool,
}

impl ActuatorCommand {
    /// Create a command with a zero value and no state data.
    #[must_use]
    pub fn new(type_id: TypeCode, location_id: impl Into<LocationId>, command: Command) -> Self {
        Self {
            type_id,
            location_id: location_id.into(),
            command,
            value: 0.0,
            state_data: None,
            is_response: false,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_state_data(mut self, state_data: impl Into<String>) -> Self {
        self.state_data = Some(state_data.into());
        self
    }
}

/// The answer an actuator gives to an [`ActuatorCommand`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorResponse {
    pub type_id: TypeCode,
    pub location_id: LocationId,
    pub command: Command,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_data: Option<String>,
    pub is_response: bool,
    pub status_code: i32,
    pub timestamp: Timestamp,
}

impl ActuatorResponse {
    /// Build the response to `command`, copying its payload.
    #[must_use]
    pub fn for_command(command: &ActuatorCommand, status_code: i32) -> Self {
        Self {
            type_id: command.type_id,
            location_id: command.location_id.clone(),
            command: command.command,
            value: command.value,
            state_data: command.state_data.clone(),
            is_response: true,
            status_code,
            timestamp: now(),
        }
    }

    /// Whether the actuator reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status_code == STATUS_OK
    }
}
