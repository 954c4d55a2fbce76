//! Adapter selection.
//!
//! The adapter family is chosen once at startup from [`AdapterMode`]; the
//! managers only ever see the resulting registries.

use edgeagent_adapter_sim::{SimConfig, SimConfigError};
use edgeagent_app::registry::{ActuatorRegistry, SensorRegistry};
use edgeagent_domain::config::AdapterMode;

/// Adapter selection errors.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// No emulated hardware is available in this build.
    #[error("emulator adapters are not available")]
    EmulatorUnavailable,
    /// The simulator settings are malformed.
    #[error("cannot build simulated adapters")]
    Simulation(#[from] SimConfigError),
}

/// Registries handed to the managers.
pub struct Adapters {
    pub sensors: SensorRegistry,
    pub actuators: ActuatorRegistry,
}

/// Build the sensor and actuator registries for `mode`.
///
/// # Errors
///
/// Returns [`FactoryError::EmulatorUnavailable`] for [`AdapterMode::Emulator`]
/// and [`FactoryError::Simulation`] when `simulation` does not validate.
pub fn build(mode: AdapterMode, simulation: &SimConfig) -> Result<Adapters, FactoryError> {
    match mode {
        AdapterMode::Simulator => simulated(simulation),
        AdapterMode::Emulator => Err(FactoryError::EmulatorUnavailable),
    }
}

/// Build the registries for `mode`, falling back to the simulators when the
/// requested family is unavailable.
///
/// # Errors
///
/// Returns [`FactoryError::Simulation`] when the simulators cannot be built
/// either.
pub fn build_or_simulate(
    mode: AdapterMode,
    simulation: &SimConfig,
) -> Result<Adapters, FactoryError> {
    match build(mode, simulation) {
        Ok(adapters) => {
            tracing::info!(?mode, "adapters selected");
            Ok(adapters)
        }
        Err(FactoryError::EmulatorUnavailable) => {
            tracing::error!(
                error = %FactoryError::EmulatorUnavailable,
                ?mode,
                "falling back to simulated adapters"
            );
            simulated(simulation)
        }
        Err(err) => Err(err),
    }
}

fn simulated(simulation: &SimConfig) -> Result<Adapters, FactoryError> {
    Ok(Adapters {
        sensors: edgeagent_adapter_sim::sensors(simulation)?,
        actuators: edgeagent_adapter_sim::actuators(),
    })
}
