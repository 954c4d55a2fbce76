//! Record timestamps.
//!
//! Timestamps are kept at millisecond precision, the resolution data
//! messages carry on the wire.

use chrono::{DateTime, SubsecRound, Utc};

/// UTC timestamp attached to sensor records and actuator responses.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time, truncated to whole milliseconds.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn should_truncate_to_milliseconds() {
        let ts = now();
        assert_eq!(ts.nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn should_not_run_ahead_of_the_clock() {
        let ts = now();
        assert!(ts <= Utc::now());
    }
}
