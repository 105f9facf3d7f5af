//! Shipment selection: the best package subset for a single vehicle trip.

mod optimal;

pub use optimal::optimal_shipment;
