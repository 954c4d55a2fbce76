//! Simulated actuator: logs activation and deactivation instead of driving
//! hardware.

use std::sync::{Mutex, PoisonError};

use edgeagent_app::ports::{Actuator, TypedAdapter};
use edgeagent_domain::actuator::{
    ActuatorCommand, ActuatorResponse, Command, HUMIDIFIER_ACTUATOR_NAME, HVAC_ACTUATOR_NAME,
    STATUS_FAILED, STATUS_OK,
};
use edgeagent_domain::error::AdapterError;
use edgeagent_domain::type_code::TypeCode;

/// Last applied command and the response it produced.
#[derive(Default)]
struct ActuatorState {
    last_command: Option<(Command, f64)>,
    latest_response: Option<ActuatorResponse>,
}

/// An actuator that only records what it was asked to do.
///
/// Commands for another type code are declined with `Ok(None)`. A command
/// repeating the last command and value is acknowledged without being
/// re-applied. Switching on with a non-finite set point is answered with
/// [`STATUS_FAILED`].
pub struct SimulatedActuator {
    name: String,
    simple_name: &'static str,
    type_code: TypeCode,
    state: Mutex<ActuatorState>,
}

impl SimulatedActuator {
    #[must_use]
    pub fn new(name: impl Into<String>, simple_name: &'static str, type_code: TypeCode) -> Self {
        Self {
            name: name.into(),
            simple_name,
            type_code,
            state: Mutex::new(ActuatorState::default()),
        }
    }

    #[must_use]
    pub fn hvac() -> Self {
        Self::new(HVAC_ACTUATOR_NAME, "HVAC", TypeCode::HVAC_ACTUATOR)
    }

    #[must_use]
    pub fn humidifier() -> Self {
        Self::new(
            HUMIDIFIER_ACTUATOR_NAME,
            "HUMIDIFIER",
            TypeCode::HUMIDIFIER_ACTUATOR,
        )
    }

    /// Whether the last applied command switched the device on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.lock().last_command, Some((Command::On, _)))
    }

    /// The response to the most recent command handled.
    #[must_use]
    pub fn latest_response(&self) -> Option<ActuatorResponse> {
        self.lock().latest_response.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ActuatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn activate(&self, value: f64, state_data: Option<&str>) -> i32 {
        tracing::info!(
            actuator = self.simple_name,
            value,
            state_data,
            "{} ON",
            self.simple_name
        );
        STATUS_OK
    }

    fn deactivate(&self) -> i32 {
        tracing::info!(actuator = self.simple_name, "{} OFF", self.simple_name);
        STATUS_OK
    }
}

impl TypedAdapter for SimulatedActuator {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_code(&self) -> TypeCode {
        self.type_code
    }
}

impl Actuator for SimulatedActuator {
    fn update_actuator(
        &self,
        command: &ActuatorCommand,
    ) -> Result<Option<ActuatorResponse>, AdapterError> {
        if command.type_id != self.type_code {
            tracing::debug!(
                actuator = self.simple_name,
                type_code = %command.type_id,
                "command targets another actuator type"
            );
            return Ok(None);
        }

        let mut state = self.lock();
        if command.command == Command::On && !command.value.is_finite() {
            tracing::warn!(
                actuator = self.simple_name,
                value = command.value,
                "refusing non-finite set point"
            );
            let response = ActuatorResponse::for_command(command, STATUS_FAILED);
            state.latest_response = Some(response.clone());
            return Ok(Some(response));
        }

        let requested = (command.command, command.value);
        #[allow(clippy::float_cmp)]
        let status = if state.last_command == Some(requested) {
            tracing::debug!(
                actuator = self.simple_name,
                "actuator command and value repeat the last ones, ignoring"
            );
            STATUS_OK
        } else {
            let status = match command.command {
                Command::On => self.activate(command.value, command.state_data.as_deref()),
                Command::Off => self.deactivate(),
            };
            state.last_command = Some(requested);
            status
        };

        let response = ActuatorResponse::for_command(command, status);
        state.latest_response = Some(response.clone());
        Ok(Some(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(type_code: TypeCode, action: Command, value: f64) -> ActuatorCommand {
        ActuatorCommand::new(type_code, "lab", action).with_value(value)
    }

    #[test]
    fn should_activate_on_command() {
        let hvac = SimulatedActuator::hvac();

        let response = hvac
            .update_actuator(&command(TypeCode::HVAC_ACTUATOR, Command::On, 21.0))
            .unwrap()
            .unwrap();

        assert!(response.is_response);
        assert_eq!(response.status_code, STATUS_OK);
        assert_eq!(response.command, Command::On);
        assert!(hvac.is_active());
    }

    #[test]
    fn should_deactivate_on_off_command() {
        let humidifier = SimulatedActuator::humidifier();
        let on = command(TypeCode::HUMIDIFIER_ACTUATOR, Command::On, 40.0);
        let off = command(TypeCode::HUMIDIFIER_ACTUATOR, Command::Off, 0.0);

        humidifier.update_actuator(&on).unwrap();
        humidifier.update_actuator(&off).unwrap();

        assert!(!humidifier.is_active());
        assert_eq!(humidifier.latest_response().unwrap().command, Command::Off);
    }

    #[test]
    fn should_decline_commands_for_other_types() {
        let hvac = SimulatedActuator::hvac();
        let result = hvac
            .update_actuator(&command(TypeCode::HUMIDIFIER_ACTUATOR, Command::On, 40.0))
            .unwrap();
        assert!(result.is_none());
        assert!(hvac.latest_response().is_none());
    }

    #[test]
    fn should_acknowledge_repeated_command() {
        let hvac = SimulatedActuator::hvac();
        let on = command(TypeCode::HVAC_ACTUATOR, Command::On, 21.0);

        hvac.update_actuator(&on).unwrap();
        let repeat = hvac.update_actuator(&on).unwrap().unwrap();

        assert!(repeat.is_ok());
        assert!(hvac.is_active());
    }

    #[test]
    fn should_fail_on_non_finite_set_point() {
        let hvac = SimulatedActuator::hvac();

        let response = hvac
            .update_actuator(&command(TypeCode::HVAC_ACTUATOR, Command::On, f64::NAN))
            .unwrap()
            .unwrap();

        assert_eq!(response.status_code, STATUS_FAILED);
        assert!(!response.is_ok());
        assert!(!hvac.is_active());
    }

    #[test]
    fn should_copy_state_data_into_response() {
        let hvac = SimulatedActuator::hvac();
        let cmd = command(TypeCode::HVAC_ACTUATOR, Command::On, 20.0).with_state_data("raise");

        let response = hvac.update_actuator(&cmd).unwrap().unwrap();

        assert_eq!(response.state_data.as_deref(), Some("raise"));
        assert_eq!(hvac.latest_response(), Some(response));
    }

    #[test]
    fn should_use_canonical_names_and_type_codes() {
        let hvac = SimulatedActuator::hvac();
        assert_eq!(hvac.name(), "HvacActuator");
        assert_eq!(hvac.type_code(), TypeCode::HVAC_ACTUATOR);
        assert_eq!(SimulatedActuator::humidifier().name(), "HumidifierActuator");
        assert_eq!(
            SimulatedActuator::humidifier().type_code(),
            TypeCode::HUMIDIFIER_ACTUATOR
        );
    }
}
