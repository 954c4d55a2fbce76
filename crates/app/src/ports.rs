//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the managers and the adapter
//! crates can depend on them without creating circular dependencies.

pub mod adapter;
pub mod listener;

pub use adapter::{Actuator, TelemetrySource, TypedAdapter};
pub use listener::DataMessageListener;
