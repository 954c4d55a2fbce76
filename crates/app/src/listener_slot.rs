//! Listener slot: the single, swappable listener reference shared between
//! the timer task and caller threads.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::ports::DataMessageListener;

/// Holds at most one [`DataMessageListener`].
///
/// Replacement swaps the `Arc` under the write lock. Readers clone the `Arc`
/// under the read lock and call out after releasing it, so a notification
/// always sees either the old or the new listener in full and a slow
/// listener never blocks replacement.
#[derive(Default)]
pub struct ListenerSlot {
    inner: RwLock<Option<Arc<dyn DataMessageListener>>>,
}

impl ListenerSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `listener`, returning the one it replaced (last registration wins).
    pub fn replace(
        &self,
        listener: Arc<dyn DataMessageListener>,
    ) -> Option<Arc<dyn DataMessageListener>> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(listener)
    }

    /// Snapshot of the attached listener, if any.
    #[must_use]
    pub fn current(&self) -> Option<Arc<dyn DataMessageListener>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.current().is_some()
    }
}

impl fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgeagent_domain::actuator::ActuatorResponse;
    use edgeagent_domain::sensor::SensorRecord;
    use edgeagent_domain::type_code::TypeCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingListener {
        sensor_calls: AtomicUsize,
    }

    impl DataMessageListener for CountingListener {
        fn handle_sensor_message(&self, _record: &SensorRecord) -> bool {
            self.sensor_calls.fetch_add(1, Ordering::SeqCst);
            true
        }

        fn handle_actuator_command_response(&self, _response: &ActuatorResponse) -> bool {
            true
        }
    }

    fn record() -> SensorRecord {
        SensorRecord::new("TempSensor", TypeCode::TEMP_SENSOR, 20.0)
    }

    #[test]
    fn should_start_without_listener() {
        let slot = ListenerSlot::new();
        assert!(!slot.is_attached());
        assert!(slot.current().is_none());
    }

    #[test]
    fn should_return_previous_listener_on_replace() {
        let slot = ListenerSlot::new();
        let first = Arc::new(CountingListener::default());
        let second = Arc::new(CountingListener::default());

        assert!(slot.replace(first.clone()).is_none());
        let previous = slot.replace(second.clone()).unwrap();
        previous.handle_sensor_message(&record());

        assert_eq!(first.sensor_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.sensor_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn should_deliver_to_latest_listener_only() {
        let slot = ListenerSlot::new();
        let first = Arc::new(CountingListener::default());
        let second = Arc::new(CountingListener::default());
        slot.replace(first.clone());
        slot.replace(second.clone());

        slot.current().unwrap().handle_sensor_message(&record());

        assert_eq!(first.sensor_calls.load(Ordering::SeqCst), 0);
        assert_eq!(second.sensor_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn should_stay_consistent_under_concurrent_replacement() {
        let slot = Arc::new(ListenerSlot::new());
        let listeners = [(); 4].map(|()| Arc::new(CountingListener::default()));
        slot.replace(listeners[0].clone());

        std::thread::scope(|scope| {
            for listener in &listeners {
                let slot = slot.clone();
                let listener = listener.clone();
                scope.spawn(move || {
                    for _ in 0..100 {
                        slot.replace(listener.clone());
                    }
                });
            }
            let reader = slot.clone();
            scope.spawn(move || {
                for _ in 0..400 {
                    assert!(reader.current().unwrap().handle_sensor_message(&record()));
                }
            });
        });

        let delivered: usize = listeners
            .iter()
            .map(|l| l.sensor_calls.load(Ordering::SeqCst))
            .sum();
        assert_eq!(delivered, 400);
    }
}
