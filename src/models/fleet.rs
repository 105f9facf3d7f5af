//! Fleet parameters.

use serde::{Deserialize, Serialize};

/// The vehicle fleet available for a delivery run.
///
/// All vehicles are identical: same speed, same carry weight. The planning
/// engine assumes sanitized positive values, so construction rejects anything
/// out of range.
///
/// # Examples
///
/// ```
/// use fleetplan::models::Fleet;
///
/// let fleet = Fleet::new(2, 70.0, 200.0).unwrap();
/// assert_eq!(fleet.vehicles(), 2);
/// assert_eq!(fleet.max_speed(), 70.0);
/// assert_eq!(fleet.max_carry_weight(), 200.0);
///
/// assert!(Fleet::new(0, 70.0, 200.0).is_none());
/// assert!(Fleet::new(2, -1.0, 200.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    vehicles: u32,
    max_speed: f64,
    max_carry_weight: f64,
}

impl Fleet {
    /// Creates a fleet description.
    ///
    /// Returns `None` if the vehicle count is zero, or if speed or carry
    /// weight is non-positive or non-finite.
    pub fn new(vehicles: u32, max_speed: f64, max_carry_weight: f64) -> Option<Self> {
        if vehicles == 0
            || !max_speed.is_finite()
            || max_speed <= 0.0
            || !max_carry_weight.is_finite()
            || max_carry_weight <= 0.0
        {
            return None;
        }
        Some(Self {
            vehicles,
            max_speed,
            max_carry_weight,
        })
    }

    /// Number of vehicles in the fleet.
    pub fn vehicles(&self) -> u32 {
        self.vehicles
    }

    /// Vehicle travel speed (distance per unit time).
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Per-vehicle carry weight limit.
    pub fn max_carry_weight(&self) -> f64 {
        self.max_carry_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_valid() {
        let f = Fleet::new(3, 70.0, 200.0).expect("valid fleet");
        assert_eq!(f.vehicles(), 3);
        assert_eq!(f.max_speed(), 70.0);
        assert_eq!(f.max_carry_weight(), 200.0);
    }

    #[test]
    fn test_fleet_rejects_zero_vehicles() {
        assert!(Fleet::new(0, 70.0, 200.0).is_none());
    }

    #[test]
    fn test_fleet_rejects_bad_speed() {
        assert!(Fleet::new(1, 0.0, 200.0).is_none());
        assert!(Fleet::new(1, -5.0, 200.0).is_none());
        assert!(Fleet::new(1, f64::NAN, 200.0).is_none());
        assert!(Fleet::new(1, f64::INFINITY, 200.0).is_none());
    }

    #[test]
    fn test_fleet_rejects_bad_carry_weight() {
        assert!(Fleet::new(1, 70.0, 0.0).is_none());
        assert!(Fleet::new(1, 70.0, -200.0).is_none());
        assert!(Fleet::new(1, 70.0, f64::NAN).is_none());
    }
}
