//! Application services: the two adapter managers.
//!
//! Each manager receives its adapter registry and the device configuration
//! through its constructor, keeping this layer decoupled from concrete
//! adapters and from any configuration loader.

pub mod actuator_adapter_manager;
pub mod sensor_adapter_manager;

use std::panic::{AssertUnwindSafe, catch_unwind};

/// Run a call into an external collaborator, turning a panic into `None`.
pub(crate) fn isolate<T>(call: impl FnOnce() -> T) -> Option<T> {
    catch_unwind(AssertUnwindSafe(call)).ok()
}
