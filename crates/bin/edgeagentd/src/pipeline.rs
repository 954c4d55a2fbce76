//! Bus subscriber that logs every data message and closes the control loop.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};

use edgeagent_app::control::ThresholdController;
use edgeagent_app::services::actuator_adapter_manager::ActuatorAdapterManager;
use edgeagent_domain::message::DataMessage;

/// Consume `messages` until the bus closes.
///
/// Sensor records are fed to `controller`; the commands it produces are
/// routed through `router`.
pub async fn run(
    mut messages: broadcast::Receiver<DataMessage>,
    controller: ThresholdController,
    router: Arc<ActuatorAdapterManager>,
) {
    loop {
        match messages.recv().await {
            Ok(message) => handle(&message, &controller, &router),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "message subscriber lagged behind the bus");
            }
            Err(RecvError::Closed) => break,
        }
    }
    tracing::debug!("message bus closed");
}

fn handle(
    message: &DataMessage,
    controller: &ThresholdController,
    router: &ActuatorAdapterManager,
) {
    match serde_json::to_string(message) {
        Ok(json) => tracing::debug!(%json, "data message"),
        Err(err) => tracing::warn!(error = %err, "failed to encode data message"),
    }

    let DataMessage::Sensor(record) = message else {
        return;
    };
    for command in controller.evaluate(record) {
        let accepted = router.send_actuator_command(&command);
        tracing::debug!(
            type_code = %command.type_id,
            command = %command.command,
            accepted,
            "control command routed"
        );
    }
}
