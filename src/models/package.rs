//! Package types.

use serde::{Deserialize, Serialize};

use crate::timing::DeliveryTiming;

/// A package waiting to be shipped.
///
/// Immutable once created; identity (the id) persists through delivery.
/// Carries no timing data until it is assigned to a shipment.
///
/// # Examples
///
/// ```
/// use fleetplan::models::Package;
///
/// let p = Package::new("PKG1", 50.0, 30.0).with_offer_code("OFR001");
/// assert_eq!(p.id(), "PKG1");
/// assert_eq!(p.weight(), 50.0);
/// assert_eq!(p.distance(), 30.0);
/// assert_eq!(p.offer_code(), "OFR001");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    id: String,
    weight: f64,
    distance: f64,
    offer_code: String,
}

impl Package {
    /// Creates a package with no offer code.
    pub fn new(id: impl Into<String>, weight: f64, distance: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            distance,
            offer_code: String::new(),
        }
    }

    /// Sets the eligible offer code for this package.
    pub fn with_offer_code(mut self, code: impl Into<String>) -> Self {
        self.offer_code = code.into();
        self
    }

    /// Unique package ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Package weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Delivery distance from the depot.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Eligible offer code, empty when none applies.
    ///
    /// Opaque to the planning engine; the pricing collaborator interprets it.
    pub fn offer_code(&self) -> &str {
        &self.offer_code
    }
}

/// A package that has been assigned to a shipment, with its computed timing.
///
/// Produced exactly once per package, at the moment of assignment. The timing
/// is never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedPackage {
    package: Package,
    timing: DeliveryTiming,
}

impl ProcessedPackage {
    /// Pairs a package with its delivery timing.
    pub fn new(package: Package, timing: DeliveryTiming) -> Self {
        Self { package, timing }
    }

    /// The underlying package.
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Unique package ID.
    pub fn id(&self) -> &str {
        self.package.id()
    }

    /// Package weight.
    pub fn weight(&self) -> f64 {
        self.package.weight()
    }

    /// Computed delivery timing.
    pub fn timing(&self) -> &DeliveryTiming {
        &self.timing
    }

    /// Simulated time at which this package arrives at its destination.
    pub fn arrival_time(&self) -> f64 {
        self.timing.arrival_time
    }

    /// Splits into the package and its timing.
    pub fn into_parts(self) -> (Package, DeliveryTiming) {
        (self.package, self.timing)
    }
}
