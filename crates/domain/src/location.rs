//! Location identifiers.
//!
//! A device is configured with exactly one location; inbound commands must
//! name the same location to be accepted. Equality is an exact,
//! case-sensitive string match.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location value used when the configuration provides none.
pub const NOT_SET: &str = "Not Set";

/// Identifier of the physical location a device is deployed at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl Default for LocationId {
    fn default() -> Self {
        Self(NOT_SET.to_string())
    }
}

impl LocationId {
    /// Wrap a location string as-is.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw location string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the [`NOT_SET`] placeholder.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0 != NOT_SET
    }

    /// Whether the identifier is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for LocationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
