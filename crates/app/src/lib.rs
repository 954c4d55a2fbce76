//! # edgeagent-app
//!
//! Application layer: the adapter-management core and its **port definitions**.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters and consumers implement:
//!   - `TelemetrySource`: produces one sensor reading per call
//!   - `Actuator`: applies a command and answers with a response
//!   - `DataMessageListener`: the single observer of telemetry and responses
//! - Provide the **adapter managers**:
//!   - `SensorAdapterManager`: periodic polling scheduler
//!   - `ActuatorAdapterManager`: command validation and type-based dispatch
//! - Provide **in-process infrastructure** (message bus, threshold controller)
//!   that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `edgeagent-domain` only (plus `tokio` for the timer and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod control;
pub mod error;
pub mod event_bus;
pub mod listener_slot;
pub mod ports;
pub mod registry;
pub mod services;
