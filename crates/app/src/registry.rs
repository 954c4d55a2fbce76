//! Adapter registry: a fixed type-code → adapter mapping.
//!
//! The registry is assembled once, before it is handed to a manager, and is
//! read-only afterwards. Lookups therefore need no synchronization and adding
//! a new sensor or actuator type is a registration, not a code change in the
//! managers.

use std::collections::BTreeMap;
use std::fmt;

use edgeagent_domain::type_code::TypeCode;

use crate::ports::{Actuator, TelemetrySource, TypedAdapter};

/// Registry of telemetry sources, polled in ascending type-code order.
pub type SensorRegistry = AdapterRegistry<dyn TelemetrySource>;

/// Registry of actuators, the router's dispatch table.
pub type ActuatorRegistry = AdapterRegistry<dyn Actuator>;

/// Type-code keyed collection of adapters.
pub struct AdapterRegistry<A: ?Sized> {
    adapters: BTreeMap<TypeCode, Box<A>>,
}

impl<A: ?Sized> Default for AdapterRegistry<A> {
    fn default() -> Self {
        Self {
            adapters: BTreeMap::new(),
        }
    }
}

impl<A: TypedAdapter + ?Sized> AdapterRegistry<A> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an adapter under its own type code.
    ///
    /// A previously added adapter with the same code is replaced.
    #[must_use]
    pub fn with(mut self, adapter: Box<A>) -> Self {
        self.insert(adapter);
        self
    }

    fn insert(&mut self, adapter: Box<A>) {
        let code = adapter.type_code();
        if let Some(previous) = self.adapters.insert(code, adapter) {
            tracing::warn!(
                type_code = %code,
                replaced = previous.name(),
                "adapter registered twice for the same type, keeping the latest"
            );
        }
    }

    /// Look up the adapter registered for `code`.
    #[must_use]
    pub fn get(&self, code: TypeCode) -> Option<&A> {
        self.adapters.get(&code).map(Box::as_ref)
    }

    /// Iterate adapters in ascending type-code order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.adapters.values().map(Box::as_ref)
    }

    /// Registered type codes, ascending.
    pub fn type_codes(&self) -> impl Iterator<Item = TypeCode> + '_ {
        self.adapters.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl<A: TypedAdapter + ?Sized> FromIterator<Box<A>> for AdapterRegistry<A> {
    fn from_iter<I: IntoIterator<Item = Box<A>>>(iter: I) -> Self {
        let mut registry = Self::new();
        for adapter in iter {
            registry.insert(adapter);
        }
        registry
    }
}

impl<A: TypedAdapter + ?Sized> fmt::Debug for AdapterRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.adapters.iter().map(|(code, a)| (code, a.name())))
            .finish()
    }
}
