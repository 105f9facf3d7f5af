//! Greedy-seeded optimal shipment selection.
//!
//! Builds one candidate combination per starting package: seed with the
//! starting package, then greedily add every other package (in pool order)
//! that still fits the carry weight. The winner has the most packages, ties
//! broken by total weight, remaining ties by first-encountered candidate.
//!
//! The seeded greedy scan is deliberately asymmetric: an early pick can
//! consume capacity a later package needed, so the choice of starting
//! package changes which siblings fit.
//!
//! # Complexity
//!
//! O(n²) where n = pool size.

use crate::models::{Package, ProcessedPackage, Shipment};
use crate::timing::DeliveryTiming;

/// One candidate combination, seeded from a single starting package.
struct Candidate {
    indices: Vec<usize>,
    total_weight: f64,
}

impl Candidate {
    /// Most packages wins; equal counts prefer the strictly heavier
    /// combination. Equality keeps the incumbent, so selection is stable.
    fn beats(&self, other: &Candidate) -> bool {
        self.indices.len() > other.indices.len()
            || (self.indices.len() == other.indices.len() && self.total_weight > other.total_weight)
    }
}

/// Selects the best shipment for one vehicle departing at `departure_time`.
///
/// Pool order affects nothing but tie-break stability. If no single package
/// fits within `max_carry_weight`, the returned shipment is empty — callers
/// must treat that as "no progress possible", not as a valid dispatch.
///
/// # Panics
///
/// Panics if `packages` is empty; calling the selector without candidates is
/// a caller bug.
///
/// # Examples
///
/// ```
/// use fleetplan::models::Package;
/// use fleetplan::selector::optimal_shipment;
///
/// let pool = vec![
///     Package::new("PKG1", 50.0, 100.0),
///     Package::new("PKG2", 100.0, 200.0),
///     Package::new("PKG3", 150.0, 150.0),
/// ];
/// let shipment = optimal_shipment(&pool, 200.0, 50.0, 0.0);
/// assert_eq!(shipment.len(), 2);
/// assert_eq!(shipment.total_weight(), 200.0);
/// assert_eq!(shipment.delivery_duration(), 3.0);
/// ```
pub fn optimal_shipment(
    packages: &[Package],
    max_carry_weight: f64,
    max_speed: f64,
    departure_time: f64,
) -> Shipment {
    assert!(
        !packages.is_empty(),
        "optimal_shipment called with an empty package pool"
    );

    let mut best: Option<Candidate> = None;

    for start in 0..packages.len() {
        if packages[start].weight() > max_carry_weight {
            continue;
        }

        let mut indices = vec![start];
        let mut total_weight = packages[start].weight();
        for (i, sibling) in packages.iter().enumerate() {
            if i == start {
                continue;
            }
            if total_weight + sibling.weight() <= max_carry_weight {
                indices.push(i);
                total_weight += sibling.weight();
            }
        }

        let candidate = Candidate {
            indices,
            total_weight,
        };
        best = Some(match best {
            None => candidate,
            Some(incumbent) => {
                if candidate.beats(&incumbent) {
                    candidate
                } else {
                    incumbent
                }
            }
        });
    }

    let members = match best {
        Some(candidate) => candidate
            .indices
            .into_iter()
            .map(|i| {
                let package = packages[i].clone();
                let timing =
                    DeliveryTiming::compute(package.distance(), max_speed, departure_time);
                ProcessedPackage::new(package, timing)
            })
            .collect(),
        None => Vec::new(),
    };

    Shipment::new(members, departure_time)
}
