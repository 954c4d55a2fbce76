//! Simulated device implementations: sensors and actuators.

mod actuator;
mod sensor;

pub use actuator::SimulatedActuator;
pub use sensor::SimulatedSensor;
