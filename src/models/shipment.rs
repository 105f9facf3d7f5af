//! Shipment type.

use crate::timing::truncate_hundredths;

use super::ProcessedPackage;

/// One vehicle trip carrying a selected subset of packages.
///
/// Created atomically by the shipment selector and never mutated afterwards;
/// the scheduler only reads its derived attributes. An empty shipment (no
/// package fits the carry weight) has every attribute at zero and signals
/// that no progress is possible.
///
/// # Examples
///
/// ```
/// use fleetplan::models::{Package, ProcessedPackage, Shipment};
/// use fleetplan::timing::DeliveryTiming;
///
/// let package = Package::new("PKG1", 10.0, 50.0);
/// let timing = DeliveryTiming::compute(50.0, 30.0, 2.56);
/// let shipment = Shipment::new(vec![ProcessedPackage::new(package, timing)], 2.56);
/// assert_eq!(shipment.delivery_duration(), 1.66);
/// assert_eq!(shipment.driver_return_duration(), 3.32);
/// assert_eq!(shipment.driver_available_time(), 5.88);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    packages: Vec<ProcessedPackage>,
    total_weight: f64,
    delivery_duration: f64,
    driver_return_duration: f64,
    driver_available_time: f64,
}

impl Shipment {
    /// Builds a shipment departing at the given time.
    ///
    /// The delivery duration is the slowest member's leg; the driver returns
    /// after twice that (round-trip symmetry). The driver becomes available
    /// at truncate₂(departure) + truncate₂(return duration).
    pub fn new(packages: Vec<ProcessedPackage>, departure_time: f64) -> Self {
        let total_weight = packages.iter().map(|p| p.weight()).sum();
        let delivery_duration = packages
            .iter()
            .map(|p| p.timing().delivery_duration)
            .fold(0.0, f64::max);
        let driver_return_duration = 2.0 * delivery_duration;
        let driver_available_time = if packages.is_empty() {
            0.0
        } else {
            truncate_hundredths(departure_time) + truncate_hundredths(driver_return_duration)
        };
        Self {
            packages,
            total_weight,
            delivery_duration,
            driver_return_duration,
            driver_available_time,
        }
    }

    /// The packages on this trip, in selection order.
    pub fn packages(&self) -> &[ProcessedPackage] {
        &self.packages
    }

    /// Consumes the shipment, yielding its packages.
    pub fn into_packages(self) -> Vec<ProcessedPackage> {
        self.packages
    }

    /// Number of packages on this trip.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if no package was selected.
    ///
    /// Callers must treat an empty shipment as "no progress possible", not
    /// as a valid dispatch.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Sum of member weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Time for the slowest package to arrive.
    pub fn delivery_duration(&self) -> f64 {
        self.delivery_duration
    }

    /// Round-trip time for the vehicle (twice the delivery duration).
    pub fn driver_return_duration(&self) -> f64 {
        self.driver_return_duration
    }

    /// Simulated time at which the vehicle is idle again.
    pub fn driver_available_time(&self) -> f64 {
        self.driver_available_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Package;
    use crate::timing::DeliveryTiming;

    fn processed(id: &str, weight: f64, distance: f64, speed: f64, departure: f64) -> ProcessedPackage {
        ProcessedPackage::new(
            Package::new(id, weight, distance),
            DeliveryTiming::compute(distance, speed, departure),
        )
    }

    #[test]
    fn test_empty_shipment_all_zero() {
        let s = Shipment::new(Vec::new(), 4.5);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.total_weight(), 0.0);
        assert_eq!(s.delivery_duration(), 0.0);
        assert_eq!(s.driver_return_duration(), 0.0);
        assert_eq!(s.driver_available_time(), 0.0);
    }

    #[test]
    fn test_single_package_shipment() {
        let s = Shipment::new(vec![processed("PKG1", 10.0, 50.0, 30.0, 2.56)], 2.56);
        assert_eq!(s.len(), 1);
        assert_eq!(s.total_weight(), 10.0);
        assert_eq!(s.delivery_duration(), 1.66);
        assert_eq!(s.driver_return_duration(), 3.32);
        assert_eq!(s.driver_available_time(), 5.88);
    }

    #[test]
    fn test_slowest_member_sets_duration() {
        let s = Shipment::new(
            vec![
                processed("PKG3", 150.0, 150.0, 50.0, 0.0),
                processed("PKG1", 50.0, 100.0, 50.0, 0.0),
            ],
            0.0,
        );
        assert_eq!(s.total_weight(), 200.0);
        assert_eq!(s.delivery_duration(), 3.0);
        assert_eq!(s.driver_return_duration(), 6.0);
        assert_eq!(s.driver_available_time(), 6.0);
    }

    #[test]
    fn test_into_packages_preserves_order() {
        let s = Shipment::new(
            vec![
                processed("A", 1.0, 10.0, 10.0, 0.0),
                processed("B", 2.0, 20.0, 10.0, 0.0),
            ],
            0.0,
        );
        let ids: Vec<String> = s.into_packages().iter().map(|p| p.id().to_string()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }
}
