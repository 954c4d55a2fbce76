//! # edgeagent-domain
//!
//! Pure domain model for the edgeagent constrained-device agent.
//!
//! ## Responsibilities
//! - Foundational types: type codes, location identifiers, error conventions, timestamps
//! - Define **Sensor records** (timestamped scalar readings for a named, typed sensor)
//! - Define **Actuator commands** and **Actuator responses**
//! - Define the **Data message** envelope delivered to listeners
//! - Define the **Device configuration** consumed by the adapter managers
//! - Define **Threshold rules** used to keep readings within a band
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod location;
pub mod time;
pub mod type_code;

pub mod actuator;
pub mod config;
pub mod message;
pub mod sensor;
pub mod threshold;
