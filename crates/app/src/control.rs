//! Threshold controller: turns telemetry into actuator commands.
//!
//! For each incoming record the controller checks every rule watching that
//! sensor type. Leaving the band switches the rule's actuator on (aiming for
//! the band's midpoint); coming back inside switches it off. Only band
//! transitions emit commands, so a steady reading does not flood the router.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use edgeagent_domain::actuator::{ActuatorCommand, Command};
use edgeagent_domain::location::LocationId;
use edgeagent_domain::sensor::SensorRecord;
use edgeagent_domain::threshold::{Band, ThresholdRule};

/// Reactive rule evaluator for sensor records.
pub struct ThresholdController {
    rules: Vec<ThresholdRule>,
    location_id: LocationId,
    bands: Mutex<HashMap<usize, Band>>,
}

impl ThresholdController {
    /// Create a controller issuing commands for `location_id`.
    ///
    /// Malformed rules are dropped with a warning.
    #[must_use]
    pub fn new(rules: Vec<ThresholdRule>, location_id: LocationId) -> Self {
        let rules = rules
            .into_iter()
            .filter(|rule| match rule.validate() {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(
                        sensor_type = %rule.sensor_type,
                        %err,
                        "ignoring malformed threshold rule"
                    );
                    false
                }
            })
            .collect();

        Self {
            rules,
            location_id,
            bands: Mutex::new(HashMap::new()),
        }
    }

    /// Evaluate `record` against all rules, returning the commands to send.
    ///
    /// Non-finite readings leave every rule's band unchanged.
    pub fn evaluate(&self, record: &SensorRecord) -> Vec<ActuatorCommand> {
        if !record.value().is_finite() {
            tracing::warn!(
                sensor = record.name(),
                value = record.value(),
                "ignoring non-finite reading"
            );
            return Vec::new();
        }

        let mut bands = self.bands.lock().unwrap_or_else(PoisonError::into_inner);
        let mut commands = Vec::new();

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.sensor_type != record.type_id() {
                continue;
            }

            let band = rule.classify(record.value());
            let previous = bands.insert(index, band).unwrap_or_default();
            if band == previous {
                continue;
            }

            let (action, state_data) = match band {
                Band::Below => (Command::On, Some("raise")),
                Band::Above => (Command::On, Some("lower")),
                Band::Within => (Command::Off, None),
            };
            let mut command =
                ActuatorCommand::new(rule.actuator_type, self.location_id.clone(), action)
                    .with_value(rule.target());
            if let Some(state_data) = state_data {
                command = command.with_state_data(state_data);
            }

            tracing::info!(
                sensor = record.name(),
                value = record.value(),
                actuator_type = %rule.actuator_type,
                command = %command.command,
                "threshold crossed"
            );
            commands.push(command);
        }

        commands
    }
}
