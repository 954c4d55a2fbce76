//! In-process message bus backed by a tokio broadcast channel.
//!
//! The bus is the default [`DataMessageListener`]: both managers notify it
//! and any number of subscribers (loggers, controllers, future uplinks)
//! receive every message.

use tokio::sync::broadcast;

use edgeagent_domain::actuator::ActuatorResponse;
use edgeagent_domain::message::DataMessage;
use edgeagent_domain::sensor::SensorRecord;

use crate::ports::DataMessageListener;

/// In-process fan-out of [`DataMessage`]s using a tokio [`broadcast`] channel.
///
/// Publishing with no active subscribers drops the message and reports it as
/// not accepted.
pub struct InProcessMessageBus {
    sender: broadcast::Sender<DataMessage>,
}

impl InProcessMessageBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to messages on this bus.
    ///
    /// Returns a receiver that will get all messages published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DataMessage> {
        self.sender.subscribe()
    }

    fn publish(&self, message: DataMessage) -> bool {
        match self.sender.send(message) {
            Ok(receivers) => {
                tracing::trace!(receivers, "published data message");
                true
            }
            Err(_) => {
                tracing::debug!("no subscribers, data message dropped");
                false
            }
        }
    }
}

impl DataMessageListener for InProcessMessageBus {
    fn handle_sensor_message(&self, record: &SensorRecord) -> bool {
        self.publish(DataMessage::Sensor(record.clone()))
    }

    fn handle_actuator_command_response(&self, response: &ActuatorResponse) -> bool {
        self.publish(DataMessage::ActuatorResponse(response.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgeagent_domain::actuator::{ActuatorCommand, Command, STATUS_OK};
    use edgeagent_domain::type_code::TypeCode;

    fn record() -> SensorRecord {
        SensorRecord::new("TempSensor", TypeCode::TEMP_SENSOR, 20.5)
    }

    #[tokio::test]
    async fn should_deliver_sensor_record_to_subscriber() {
        let bus = InProcessMessageBus::new(16);
        let mut rx = bus.subscribe();

        assert!(bus.handle_sensor_message(&record()));

        match rx.recv().await.unwrap() {
            DataMessage::Sensor(received) => assert_eq!(received.name(), "TempSensor"),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_deliver_actuator_response_to_multiple_subscribers() {
        let bus = InProcessMessageBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        let cmd = ActuatorCommand::new(TypeCode::HVAC_ACTUATOR, "lab", Command::On);
        let response = ActuatorResponse::for_command(&cmd, STATUS_OK);

        assert!(bus.handle_actuator_command_response(&response));

        let r1 = rx1.recv().await.unwrap();
        let r2 = rx2.recv().await.unwrap();
        assert_eq!(r1, DataMessage::ActuatorResponse(response.clone()));
        assert_eq!(r2, DataMessage::ActuatorResponse(response));
    }

    #[tokio::test]
    async fn should_report_not_accepted_when_no_subscribers() {
        let bus = InProcessMessageBus::new(16);
        assert!(!bus.handle_sensor_message(&record()));
    }

    #[tokio::test]
    async fn should_not_deliver_messages_published_before_subscription() {
        let bus = InProcessMessageBus::new(16);
        let _early = bus.subscribe();
        bus.handle_sensor_message(&record());

        let mut rx = bus.subscribe();
        let later = SensorRecord::new("HumiditySensor", TypeCode::HUMIDITY_SENSOR, 41.0);
        bus.handle_sensor_message(&later);

        match rx.recv().await.unwrap() {
            DataMessage::Sensor(received) => assert_eq!(received.name(), "HumiditySensor"),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
