//! # edgeagentd: edge agent daemon
//!
//! Composition root that wires the adapters to the managers and runs the
//! agent until interrupted.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Select the adapter family (simulator, or emulator with simulator fallback)
//! - Construct the polling scheduler and the command router
//! - Attach the in-process message bus as their listener
//! - Feed telemetry into the threshold controller
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod adapters;
mod config;
mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use edgeagent_app::control::ThresholdController;
use edgeagent_app::event_bus::InProcessMessageBus;
use edgeagent_app::services::actuator_adapter_manager::ActuatorAdapterManager;
use edgeagent_app::services::sensor_adapter_manager::SensorAdapterManager;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, warnings) = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_target(true)
        .compact()
        .init();
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    // Adapters
    let mode = config.device.mode();
    let adapters = adapters::build_or_simulate(mode, &config.simulation)?;

    // Managers
    let sensors = SensorAdapterManager::new(&config.device, adapters.sensors);
    let router = Arc::new(ActuatorAdapterManager::new(
        &config.device,
        adapters.actuators,
    ));

    // Message bus
    let bus = Arc::new(InProcessMessageBus::new(256));
    let controller = ThresholdController::new(config.control.rules, sensors.location_id().clone());
    let subscriber = tokio::spawn(pipeline::run(
        bus.subscribe(),
        controller,
        Arc::clone(&router),
    ));
    sensors.set_data_message_listener(bus.clone());
    router.set_data_message_listener(bus);

    if !sensors.start() {
        return Err("failed to start the sensor polling scheduler".into());
    }
    tracing::info!(
        location = %sensors.location_id(),
        interval_secs = sensors.poll_interval().as_secs(),
        "edgeagentd running"
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");

    sensors.stop();
    subscriber.abort();

    Ok(())
}
