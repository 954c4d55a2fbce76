//! Daily data-set generator for the simulated sensors.
//!
//! Each quantity follows a smooth diurnal curve between a floor and a
//! ceiling:
//!
//! | Quantity | Shape |
//! |----------|-------|
//! | Temperature | coldest at 04:00, warmest at 16:00 |
//! | Humidity | inverse of temperature, most humid at 04:00 |
//! | Pressure | semi-diurnal tide, peaks at 10:00 and 22:00 |

use std::f64::consts::TAU;

/// Lower bound of a comfortable indoor temperature, in °C.
pub const LOW_NORMAL_INDOOR_TEMP: f64 = 18.0;
/// Upper bound of a comfortable indoor temperature, in °C.
pub const HI_NORMAL_INDOOR_TEMP: f64 = 22.0;
/// Lower bound of normal relative humidity, in %.
pub const LOW_NORMAL_ENV_HUMIDITY: f64 = 35.0;
/// Upper bound of normal relative humidity, in %.
pub const HI_NORMAL_ENV_HUMIDITY: f64 = 45.0;
/// Lower bound of normal barometric pressure, in hPa.
pub const LOW_NORMAL_ENV_PRESSURE: f64 = 990.0;
/// Upper bound of normal barometric pressure, in hPa.
pub const HI_NORMAL_ENV_PRESSURE: f64 = 1010.0;

/// One sample per minute.
pub const SAMPLES_PER_DAY: usize = 24 * 60;

const HOURS_PER_DAY: f64 = 24.0;

/// Generate `samples` indoor temperatures covering one day.
#[must_use]
pub fn daily_indoor_temperature(floor: f64, ceiling: f64, samples: usize) -> Vec<f64> {
    daily_curve(floor, ceiling, samples, temperature_shape)
}

/// Generate `samples` relative humidity values covering one day.
#[must_use]
pub fn daily_environment_humidity(floor: f64, ceiling: f64, samples: usize) -> Vec<f64> {
    daily_curve(floor, ceiling, samples, humidity_shape)
}

/// Generate `samples` barometric pressure values covering one day.
#[must_use]
pub fn daily_environment_pressure(floor: f64, ceiling: f64, samples: usize) -> Vec<f64> {
    daily_curve(floor, ceiling, samples, pressure_shape)
}

fn temperature_shape(hour: f64) -> f64 {
    -cycle(hour, 4.0, HOURS_PER_DAY)
}

fn humidity_shape(hour: f64) -> f64 {
    cycle(hour, 4.0, HOURS_PER_DAY)
}

fn pressure_shape(hour: f64) -> f64 {
    cycle(hour, 10.0, HOURS_PER_DAY / 2.0)
}

/// Cosine with its maximum at `peak_hour`, repeating every `period` hours.
fn cycle(hour: f64, peak_hour: f64, period: f64) -> f64 {
    (TAU * (hour - peak_hour) / period).cos()
}

/// Map `shape` (in `[-1, 1]`) onto `[floor, ceiling]` for each sample.
///
/// Inverted bounds are swapped. Non-finite bounds produce an empty set.
#[allow(clippy::cast_precision_loss)]
fn daily_curve(floor: f64, ceiling: f64, samples: usize, shape: impl Fn(f64) -> f64) -> Vec<f64> {
    if !floor.is_finite() || !ceiling.is_finite() {
        return Vec::new();
    }
    let (floor, ceiling) = if floor > ceiling {
        (ceiling, floor)
    } else {
        (floor, ceiling)
    };
    let mid = f64::midpoint(floor, ceiling);
    let amplitude = (ceiling - floor) / 2.0;

    (0..samples)
        .map(|i| {
            let hour = HOURS_PER_DAY * i as f64 / samples as f64;
            (mid + amplitude * shape(hour)).clamp(floor, ceiling)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(values: &[f64], floor: f64, ceiling: f64) -> bool {
        values.iter().all(|v| (floor..=ceiling).contains(v))
    }

    #[test]
    fn should_generate_requested_number_of_samples() {
        assert_eq!(daily_indoor_temperature(18.0, 22.0, 1440).len(), 1440);
        assert!(daily_indoor_temperature(18.0, 22.0, 0).is_empty());
    }

    #[test]
    fn should_stay_within_bounds() {
        let temps = daily_indoor_temperature(18.0, 22.0, 96);
        assert!(within(&temps, 18.0, 22.0));
        let humidity = daily_environment_humidity(35.0, 45.0, 96);
        assert!(within(&humidity, 35.0, 45.0));
        let pressure = daily_environment_pressure(990.0, 1010.0, 96);
        assert!(within(&pressure, 990.0, 1010.0));
    }

    #[test]
    fn should_be_coldest_before_dawn_and_warmest_in_afternoon() {
        let temps = daily_indoor_temperature(18.0, 22.0, 24);
        assert!((temps[4] - 18.0).abs() < 1e-9);
        assert!((temps[16] - 22.0).abs() < 1e-9);
    }

    #[test]
    fn should_peak_humidity_when_temperature_is_lowest() {
        let humidity = daily_environment_humidity(35.0, 45.0, 24);
        assert!((humidity[4] - 45.0).abs() < 1e-9);
        assert!((humidity[16] - 35.0).abs() < 1e-9);
    }

    #[test]
    fn should_peak_pressure_twice_a_day() {
        let pressure = daily_environment_pressure(990.0, 1010.0, 24);
        assert!((pressure[10] - 1010.0).abs() < 1e-9);
        assert!((pressure[22] - 1010.0).abs() < 1e-9);
        assert!((pressure[4] - 990.0).abs() < 1e-9);
    }

    #[test]
    fn should_swap_inverted_bounds() {
        let temps = daily_indoor_temperature(22.0, 18.0, 24);
        assert_eq!(temps.len(), 24);
        assert!(within(&temps, 18.0, 22.0));
    }

    #[test]
    fn should_produce_empty_set_for_non_finite_bounds() {
        assert!(daily_environment_humidity(f64::NAN, 45.0, 10).is_empty());
        let pressure = daily_environment_pressure(990.0, f64::INFINITY, 10);
        assert!(pressure.is_empty());
    }

    #[test]
    fn should_produce_constant_set_for_degenerate_range() {
        let temps = daily_indoor_temperature(20.0, 20.0, 10);
        assert!(temps.iter().all(|t| (t - 20.0).abs() < f64::EPSILON));
    }
}
