//! Discrete-event fleet scheduling loop.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{Fleet, Package, ProcessedPackage, Shipment};
use crate::selector::optimal_shipment;

use super::ScheduleError;

/// Drives the delivery simulation: repeatedly selects the best shipment
/// while vehicles are idle, advances simulated time when all are busy, and
/// reconciles returning vehicles with the shrinking package pool.
///
/// The scheduler exclusively owns its undelivered, in-flight, and delivered
/// collections; `dispatch` and `advance` are the only writers. The run is
/// single-threaded and deterministic — identical inputs always produce
/// identical assignments and timings.
///
/// # Examples
///
/// ```
/// use fleetplan::models::{Fleet, Package};
/// use fleetplan::scheduler::FleetScheduler;
///
/// let fleet = Fleet::new(1, 50.0, 100.0).unwrap();
/// let packages = vec![
///     Package::new("PKG1", 40.0, 100.0),
///     Package::new("PKG2", 80.0, 50.0),
/// ];
/// let delivered = FleetScheduler::new(fleet, packages).run().unwrap();
/// assert_eq!(delivered.len(), 2);
/// assert_eq!(delivered[0].id(), "PKG1");
/// ```
pub struct FleetScheduler {
    fleet: Fleet,
    input_order: Vec<String>,
    undelivered: Vec<Package>,
    in_flight: Vec<Shipment>,
    delivered: Vec<ProcessedPackage>,
    available_vehicles: u32,
    current_time: f64,
}

impl FleetScheduler {
    /// Creates a scheduler over the given fleet and package pool.
    ///
    /// The pool is sorted once by weight then distance, ascending; this fixes
    /// the tie-break order the selector sees on every dispatch. The original
    /// input order is remembered so the delivered output can be restored to it.
    pub fn new(fleet: Fleet, packages: Vec<Package>) -> Self {
        let input_order = packages.iter().map(|p| p.id().to_string()).collect();
        let mut undelivered = packages;
        undelivered.sort_by(|a, b| {
            a.weight()
                .total_cmp(&b.weight())
                .then(a.distance().total_cmp(&b.distance()))
        });
        Self {
            available_vehicles: fleet.vehicles(),
            fleet,
            input_order,
            undelivered,
            in_flight: Vec::new(),
            delivered: Vec::new(),
            current_time: 0.0,
        }
    }

    /// Runs the simulation to completion.
    ///
    /// Returns the delivered packages in the original input order, each
    /// carrying its computed timing. Fails with [`ScheduleError::Stalled`]
    /// when the remaining packages cannot fit any vehicle.
    pub fn run(mut self) -> Result<Vec<ProcessedPackage>, ScheduleError> {
        let total = self.undelivered.len();

        while !self.undelivered.is_empty() || !self.in_flight.is_empty() {
            debug_assert_eq!(
                self.undelivered.len() + self.in_flight_package_count() + self.delivered.len(),
                total,
                "package conservation violated"
            );
            if !self.undelivered.is_empty() && self.available_vehicles > 0 {
                self.dispatch()?;
            } else {
                self.advance();
            }
        }

        Ok(Self::restore_input_order(self.input_order, self.delivered))
    }

    /// Assigns an idle vehicle to the best shipment over the current pool.
    fn dispatch(&mut self) -> Result<(), ScheduleError> {
        let shipment = optimal_shipment(
            &self.undelivered,
            self.fleet.max_carry_weight(),
            self.fleet.max_speed(),
            self.current_time,
        );
        if shipment.is_empty() {
            let package_ids: Vec<String> = self
                .undelivered
                .iter()
                .map(|p| p.id().to_string())
                .collect();
            warn!(
                "no remaining package fits carry weight {}; stalling with {package_ids:?}",
                self.fleet.max_carry_weight()
            );
            return Err(ScheduleError::Stalled { package_ids });
        }

        self.undelivered
            .retain(|p| shipment.packages().iter().all(|m| m.id() != p.id()));
        debug!(
            "dispatch at t={}: {} package(s), weight {}, driver back at {}",
            self.current_time,
            shipment.len(),
            shipment.total_weight(),
            shipment.driver_available_time()
        );
        self.in_flight.push(shipment);
        self.available_vehicles -= 1;
        Ok(())
    }

    /// Completes every in-flight shipment at the earliest return time and
    /// moves the clock there. Ties return simultaneously.
    fn advance(&mut self) {
        debug_assert!(
            !self.in_flight.is_empty(),
            "advance called with no shipment in flight"
        );
        let earliest_return = self
            .in_flight
            .iter()
            .map(Shipment::driver_available_time)
            .fold(f64::INFINITY, f64::min);

        let mut still_out = Vec::with_capacity(self.in_flight.len());
        let mut returned: u32 = 0;
        for shipment in self.in_flight.drain(..) {
            if shipment.driver_available_time() == earliest_return {
                self.delivered.extend(shipment.into_packages());
                returned += 1;
            } else {
                still_out.push(shipment);
            }
        }
        self.in_flight = still_out;
        self.available_vehicles += returned;
        self.current_time = earliest_return;
        debug!("advance to t={earliest_return}: {returned} vehicle(s) returned");
    }

    fn in_flight_package_count(&self) -> usize {
        self.in_flight.iter().map(Shipment::len).sum()
    }

    /// Reorders delivered packages to match the original input order by id.
    fn restore_input_order(
        input_order: Vec<String>,
        mut delivered: Vec<ProcessedPackage>,
    ) -> Vec<ProcessedPackage> {
        let rank: HashMap<&str, usize> = input_order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        delivered.sort_by_key(|p| rank.get(p.id()).copied().unwrap_or(usize::MAX));
        delivered
    }
}
