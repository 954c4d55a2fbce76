//! Application-layer errors.

use edgeagent_domain::error::AdapterError;
use edgeagent_domain::location::LocationId;
use edgeagent_domain::type_code::TypeCode;

/// Why a command was refused before reaching any actuator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The payload is flagged as a response, not a command.
    #[error("payload is flagged as a response")]
    ResponseFlagged,

    /// This device has no location, so no command can address it.
    #[error("device location is not set")]
    LocationUnset,

    /// The command targets another device.
    #[error("location {actual} does not match {expected}")]
    LocationMismatch {
        expected: LocationId,
        actual: LocationId,
    },
}

/// Outcome of a command that did not produce a response.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The command failed validation.
    #[error("command rejected")]
    Rejected(#[from] RejectReason),

    /// No actuator is registered for the command's type.
    #[error("no actuator registered for type {0}")]
    UnknownType(TypeCode),

    /// The actuator failed while handling the command.
    #[error("actuator for type {type_code} failed")]
    ActuatorFailed {
        type_code: TypeCode,
        #[source]
        source: AdapterError,
    },

    /// The actuator panicked while handling the command.
    #[error("actuator for type {0} panicked")]
    ActuatorPanicked(TypeCode),

    /// The actuator handled the command but returned no response.
    #[error("actuator for type {0} returned no response")]
    NoResponse(TypeCode),
}
