//! Per-package delivery timing.

use serde::{Deserialize, Serialize};

use super::{round_hundredths, truncate_hundredths};

/// Timing attributes of a single delivered package.
///
/// Computed exactly once, when the package is assigned to a shipment. The
/// duration and departure are truncated to two decimals while the arrival is
/// rounded; mixing the two modes is intentional.
///
/// # Examples
///
/// ```
/// use fleetplan::timing::DeliveryTiming;
///
/// let t = DeliveryTiming::compute(50.0, 30.0, 2.56);
/// assert_eq!(t.delivery_duration, 1.66);
/// assert_eq!(t.departure_time, 2.56);
/// assert_eq!(t.arrival_time, 4.22);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTiming {
    /// One-way travel time for this package, truncated to two decimals.
    pub delivery_duration: f64,
    /// Simulated time the vehicle departed, truncated to two decimals.
    pub departure_time: f64,
    /// Departure plus duration, rounded to two decimals.
    pub arrival_time: f64,
}

impl DeliveryTiming {
    /// Computes the timing for a package at the given distance, vehicle
    /// speed, and departure time.
    ///
    /// Pure: identical arguments always yield identical results.
    pub fn compute(distance: f64, max_speed: f64, departure_time: f64) -> Self {
        let delivery_duration = truncate_hundredths(distance / max_speed);
        let departure_time = truncate_hundredths(departure_time);
        let arrival_time = round_hundredths(departure_time + delivery_duration);
        Self {
            delivery_duration,
            departure_time,
            arrival_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_truncates_duration() {
        // 50 / 30 = 1.6666... truncates to 1.66, never 1.67.
        let t = DeliveryTiming::compute(50.0, 30.0, 2.56);
        assert_eq!(t.delivery_duration, 1.66);
        assert_eq!(t.departure_time, 2.56);
        assert_eq!(t.arrival_time, 4.22);
    }

    #[test]
    fn test_compute_zero_departure() {
        let t = DeliveryTiming::compute(150.0, 50.0, 0.0);
        assert_eq!(t.delivery_duration, 3.0);
        assert_eq!(t.departure_time, 0.0);
        assert_eq!(t.arrival_time, 3.0);
    }

    #[test]
    fn test_compute_rounds_arrival() {
        let t = DeliveryTiming::compute(100.0, 70.0, 5.68);
        assert_eq!(t.delivery_duration, 1.42);
        assert_eq!(t.arrival_time, 7.1);
    }

    #[test]
    fn test_compute_idempotent() {
        let a = DeliveryTiming::compute(100.07, 70.0, 2.84);
        let b = DeliveryTiming::compute(100.07, 70.0, 2.84);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_round_trip() {
        let t = DeliveryTiming::compute(50.0, 30.0, 2.56);
        let json = serde_json::to_string(&t).expect("serialize");
        let back: DeliveryTiming = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(t, back);
    }
}
