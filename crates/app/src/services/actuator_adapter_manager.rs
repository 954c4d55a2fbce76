//! Actuator adapter manager: validates inbound actuator commands, routes
//! them to the actuator registered for their type and forwards the response
//! to the listener.

use std::sync::Arc;

use edgeagent_domain::actuator::{ActuatorCommand, ActuatorResponse};
use edgeagent_domain::config::DeviceConfig;
use edgeagent_domain::location::LocationId;
use edgeagent_domain::type_code::TypeCode;

use crate::error::{DispatchError, RejectReason};
use crate::listener_slot::ListenerSlot;
use crate::ports::{Actuator, DataMessageListener, TypedAdapter};
use crate::registry::ActuatorRegistry;
use crate::services::isolate;

/// Command router backed by a fixed type-code → actuator table.
pub struct ActuatorAdapterManager {
    actuators: ActuatorRegistry,
    location_id: LocationId,
    listener: ListenerSlot,
}

impl ActuatorAdapterManager {
    /// Create a router dispatching to `actuators`.
    ///
    /// A blank configured location is replaced by the "Not Set" placeholder,
    /// and the router then rejects every command.
    #[must_use]
    pub fn new(config: &DeviceConfig, actuators: ActuatorRegistry) -> Self {
        let location_id = config.location().unwrap_or_else(|| {
            tracing::warn!("no location configured for actuator adapter manager");
            LocationId::default()
        });
        tracing::info!(
            location = %location_id,
            actuators = ?actuators,
            "created actuator adapter manager"
        );

        Self {
            actuators,
            location_id,
            listener: ListenerSlot::new(),
        }
    }

    /// Attach the listener, replacing any previous one.
    pub fn set_data_message_listener(&self, listener: Arc<dyn DataMessageListener>) {
        if self.listener.replace(listener).is_some() {
            tracing::debug!("actuator listener replaced");
        }
    }

    /// Route `command` to its actuator.
    ///
    /// Returns `true` when the actuator produced a response, whether or not a
    /// listener was attached to receive it. Every failure is logged.
    pub fn send_actuator_command(&self, command: &ActuatorCommand) -> bool {
        self.dispatch(command).is_ok()
    }

    /// Route `command` to its actuator and return the response.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Rejected`] for response-flagged payloads or a
    ///   location other than this device's.
    /// - [`DispatchError::UnknownType`] when no actuator is registered for
    ///   the command's type.
    /// - [`DispatchError::ActuatorFailed`], [`DispatchError::ActuatorPanicked`]
    ///   or [`DispatchError::NoResponse`] when the actuator did not answer.
    pub fn dispatch(&self, command: &ActuatorCommand) -> Result<ActuatorResponse, DispatchError> {
        if let Err(reason) = self.validate(command) {
            tracing::warn!(
                type_code = %command.type_id,
                %reason,
                "ignoring invalid actuator command"
            );
            return Err(reason.into());
        }

        let type_code = command.type_id;
        let Some(actuator) = self.actuators.get(type_code) else {
            tracing::warn!(%type_code, "no actuator registered for type");
            return Err(DispatchError::UnknownType(type_code));
        };

        tracing::info!(
            %type_code,
            actuator = actuator.name(),
            command = %command.command,
            value = command.value,
            "processing actuator command"
        );

        let response = match isolate(|| actuator.update_actuator(command)) {
            Some(Ok(Some(response))) => response,
            Some(Ok(None)) => {
                tracing::warn!(%type_code, "actuator returned no response");
                return Err(DispatchError::NoResponse(type_code));
            }
            Some(Err(source)) => {
                tracing::warn!(%type_code, err = %source, "actuator failed");
                return Err(DispatchError::ActuatorFailed { type_code, source });
            }
            None => {
                tracing::warn!(%type_code, "actuator panicked");
                return Err(DispatchError::ActuatorPanicked(type_code));
            }
        };

        match self.listener.current() {
            Some(listener) => {
                if isolate(|| listener.handle_actuator_command_response(&response)) != Some(true) {
                    tracing::warn!(%type_code, "listener did not accept actuator response");
                }
            }
            None => tracing::debug!(%type_code, "no listener attached, response not forwarded"),
        }

        Ok(response)
    }

    fn validate(&self, command: &ActuatorCommand) -> Result<(), RejectReason> {
        if command.is_response {
            return Err(RejectReason::ResponseFlagged);
        }
        if !self.location_id.is_set() {
            return Err(RejectReason::LocationUnset);
        }
        if command.location_id != self.location_id {
            return Err(RejectReason::LocationMismatch {
                expected: self.location_id.clone(),
                actual: command.location_id.clone(),
            });
        }
        Ok(())
    }

    /// Type codes this router can dispatch, ascending.
    pub fn supported_types(&self) -> impl Iterator<Item = TypeCode> + '_ {
        self.actuators.type_codes()
    }

    #[must_use]
    pub fn location_id(&self) -> &LocationId {
        &self.location_id
    }
}
