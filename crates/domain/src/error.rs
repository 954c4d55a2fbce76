//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors. Adapters report failures with
//! [`AdapterError`]; the application layer wraps it with `#[source]` where
//! the failure crosses a port boundary.

use crate::type_code::TypeCode;

/// Failure reported by a telemetry source or an actuator.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The underlying device (or its emulation) is not reachable.
    #[error("adapter {name} is unavailable")]
    Unavailable {
        /// Adapter name, e.g. `"TempSensor"`.
        name: String,
    },

    /// The device accepted the call but failed while handling it.
    #[error("fault in {component}: {details}")]
    Fault {
        /// Component that failed.
        component: String,
        /// Human-readable description of the fault.
        details: String,
    },

    /// The command cannot be applied by this adapter.
    #[error("invalid command for type {0}")]
    InvalidCommand(TypeCode),
}

/// Domain validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A floor/ceiling pair where the floor is above the ceiling.
    #[error("floor {floor} is above ceiling {ceiling}")]
    InvertedRange {
        /// Lower bound.
        floor: f64,
        /// Upper bound.
        ceiling: f64,
    },

    /// A bound is NaN or infinite.
    #[error("range bounds must be finite")]
    NonFiniteBound,
}
