//! Domain model types for shipment planning.
//!
//! Provides the core abstractions: packages with weight and distance,
//! processed packages carrying their computed delivery timing, shipments as
//! one-trip package subsets with derived scheduling attributes, and the
//! fleet description.

mod fleet;
mod package;
mod shipment;

pub use fleet::Fleet;
pub use package::{Package, ProcessedPackage};
pub use shipment::Shipment;
