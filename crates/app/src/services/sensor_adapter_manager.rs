//! Sensor adapter manager: polls every registered telemetry source on a
//! fixed cadence and forwards the location-stamped records to the listener.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use edgeagent_domain::config::{DEFAULT_POLL_CYCLES, DeviceConfig};
use edgeagent_domain::location::LocationId;

use crate::listener_slot::ListenerSlot;
use crate::ports::{DataMessageListener, TelemetrySource, TypedAdapter};
use crate::registry::SensorRegistry;
use crate::services::isolate;

/// What a single poll of all sources produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Records produced by the sources.
    pub generated: usize,
    /// Sources that returned an error or panicked.
    pub failed: usize,
    /// Records the listener accepted.
    pub delivered: usize,
}

/// Periodic telemetry scheduler.
///
/// [`start`](Self::start) spawns one timer task on the current tokio runtime.
/// The first poll happens one interval after start. [`stop`](Self::stop)
/// signals the task, which exits at its next wait point: a poll already in
/// progress always runs to completion, and polls never overlap.
pub struct SensorAdapterManager {
    poller: Arc<TelemetryPoller>,
    interval: Duration,
    runner: Mutex<Option<Runner>>,
}

struct Runner {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Runner {
    fn is_active(&self) -> bool {
        !self.handle.is_finished() && !*self.shutdown.borrow()
    }
}

impl SensorAdapterManager {
    /// Create a stopped manager polling `sources`.
    ///
    /// A non-positive poll interval is replaced by [`DEFAULT_POLL_CYCLES`]
    /// seconds and a blank location by the "Not Set" placeholder; both are
    /// logged.
    #[must_use]
    pub fn new(config: &DeviceConfig, sources: SensorRegistry) -> Self {
        let interval = config.poll_interval().unwrap_or_else(|| {
            tracing::warn!(
                configured = config.poll_interval_secs,
                default = DEFAULT_POLL_CYCLES,
                "invalid poll interval, using default"
            );
            Duration::from_secs(DEFAULT_POLL_CYCLES)
        });
        let location_id = config.location().unwrap_or_else(|| {
            tracing::warn!("no location configured for sensor adapter manager");
            LocationId::default()
        });
        if sources.is_empty() {
            tracing::warn!("sensor adapter manager created without telemetry sources");
        }

        Self {
            poller: Arc::new(TelemetryPoller {
                sources,
                location_id,
                listener: ListenerSlot::new(),
                busy: AtomicBool::new(false),
            }),
            interval,
            runner: Mutex::new(None),
        }
    }

    /// Attach the listener, replacing any previous one.
    pub fn set_data_message_listener(&self, listener: Arc<dyn DataMessageListener>) {
        if self.poller.listener.replace(listener).is_some() {
            tracing::debug!("sensor listener replaced");
        }
    }

    /// Start the repeating poll timer.
    ///
    /// Returns `false` without side effects when the timer is already running
    /// or when called outside a tokio runtime.
    pub fn start(&self) -> bool {
        let mut runner = self.runner.lock().unwrap_or_else(PoisonError::into_inner);
        if runner.as_ref().is_some_and(Runner::is_active) {
            tracing::warn!("sensor adapter manager already started");
            return false;
        }

        let Ok(runtime) = Handle::try_current() else {
            tracing::error!("sensor adapter manager needs a tokio runtime to start");
            return false;
        };

        let (shutdown, shutdown_rx) = watch::channel(false);
        let handle = runtime.spawn(poll_loop(self.poller.clone(), self.interval, shutdown_rx));
        *runner = Some(Runner { shutdown, handle });

        tracing::info!(
            interval_secs = self.interval.as_secs(),
            location = %self.poller.location_id,
            sources = self.poller.sources.len(),
            "started sensor adapter manager"
        );
        true
    }

    /// Stop the poll timer.
    ///
    /// Returns `false` when it was not running.
    pub fn stop(&self) -> bool {
        let runner = self
            .runner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match runner {
            Some(runner) if runner.is_active() => {
                runner.shutdown.send_replace(true);
                tracing::info!("stopped sensor adapter manager");
                true
            }
            _ => {
                tracing::warn!("sensor adapter manager already stopped");
                false
            }
        }
    }

    /// Whether the poll timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.runner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(Runner::is_active)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn location_id(&self) -> &LocationId {
        &self.poller.location_id
    }
}

impl Drop for SensorAdapterManager {
    fn drop(&mut self) {
        let runner = self
            .runner
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(runner) = runner {
            runner.shutdown.send_replace(true);
        }
    }
}

async fn poll_loop(
    poller: Arc<TelemetryPoller>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            _ = ticker.tick() => {
                poller.tick();
            }
        }
    }

    tracing::debug!("sensor poll loop exited");
}

/// State shared between the manager and its timer task.
struct TelemetryPoller {
    sources: SensorRegistry,
    location_id: LocationId,
    listener: ListenerSlot,
    busy: AtomicBool,
}

/// Clears the busy flag when a tick ends, including by unwinding.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl TelemetryPoller {
    /// Poll every source once. Returns `None` when another tick is still
    /// running.
    fn tick(&self) -> Option<TickSummary> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("previous telemetry tick still running, skipping");
            return None;
        }
        let _busy = BusyGuard(&self.busy);

        let listener = self.listener.current();
        if listener.is_none() {
            tracing::debug!("no listener attached, telemetry will be dropped");
        }

        let mut summary = TickSummary::default();
        for source in self.sources.iter() {
            let record = match isolate(|| source.generate_telemetry()) {
                Some(Ok(record)) => record.with_location(self.location_id.clone()),
                Some(Err(err)) => {
                    tracing::warn!(
                        source = source.name(),
                        type_code = %source.type_code(),
                        %err,
                        "telemetry source failed"
                    );
                    summary.failed += 1;
                    continue;
                }
                None => {
                    tracing::warn!(
                        source = source.name(),
                        type_code = %source.type_code(),
                        "telemetry source panicked"
                    );
                    summary.failed += 1;
                    continue;
                }
            };
            summary.generated += 1;
            tracing::debug!(
                name = record.name(),
                type_code = %record.type_id(),
                value = record.value(),
                "generated telemetry"
            );

            if let Some(listener) = &listener {
                if isolate(|| listener.handle_sensor_message(&record)) == Some(true) {
                    summary.delivered += 1;
                } else {
                    tracing::warn!(name = record.name(), "listener did not accept telemetry");
                }
            }
        }

        Some(summary)
    }
}
