//! Orchestration-facing entry point.
//!
//! A delivery run either simulates the fleet (packages come back with
//! arrival times) or, when no fleet parameters were supplied, reports the
//! packages priced-only with no timing. [`PlannedPackage`] covers both
//! renderings with an optional timing.

use serde::{Deserialize, Serialize};

use crate::models::{Fleet, Package, ProcessedPackage};
use crate::scheduler::{FleetScheduler, ScheduleError};
use crate::timing::DeliveryTiming;

/// A package as reported back to the delivery orchestrator.
///
/// Timing is present after a full simulation and absent for a priced-only
/// run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedPackage {
    package: Package,
    timing: Option<DeliveryTiming>,
}

impl PlannedPackage {
    /// Wraps a package that was priced but never scheduled.
    pub fn priced_only(package: Package) -> Self {
        Self {
            package,
            timing: None,
        }
    }

    /// The underlying package.
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Computed timing, if the package went through a simulation.
    pub fn timing(&self) -> Option<&DeliveryTiming> {
        self.timing.as_ref()
    }

    /// Arrival time, if known.
    pub fn arrival_time(&self) -> Option<f64> {
        self.timing.map(|t| t.arrival_time)
    }
}

impl From<ProcessedPackage> for PlannedPackage {
    fn from(processed: ProcessedPackage) -> Self {
        let (package, timing) = processed.into_parts();
        Self {
            package,
            timing: Some(timing),
        }
    }
}

/// Plans a delivery run for the orchestrator.
///
/// With a fleet, runs the full simulation and returns the packages in input
/// order with arrival times. Without one, returns the packages untimed in
/// input order.
///
/// # Examples
///
/// ```
/// use fleetplan::models::{Fleet, Package};
/// use fleetplan::plan::plan_delivery;
///
/// let packages = vec![Package::new("PKG1", 10.0, 50.0)];
///
/// let timed = plan_delivery(packages.clone(), Fleet::new(1, 30.0, 20.0)).unwrap();
/// assert_eq!(timed[0].arrival_time(), Some(1.66));
///
/// let untimed = plan_delivery(packages, None).unwrap();
/// assert_eq!(untimed[0].arrival_time(), None);
/// ```
pub fn plan_delivery(
    packages: Vec<Package>,
    fleet: Option<Fleet>,
) -> Result<Vec<PlannedPackage>, ScheduleError> {
    match fleet {
        Some(fleet) => {
            let delivered = FleetScheduler::new(fleet, packages).run()?;
            Ok(delivered.into_iter().map(PlannedPackage::from).collect())
        }
        None => Ok(packages
            .into_iter()
            .map(PlannedPackage::priced_only)
            .collect()),
    }
}
