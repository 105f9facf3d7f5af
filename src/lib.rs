//! # fleetplan
//!
//! Shipment-planning engine for courier deliveries: selects the best package
//! subset for each vehicle trip and simulates fleet availability over time
//! until every package has shipped.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Package, ProcessedPackage, Shipment, Fleet)
//! - [`plan`] — Orchestration entry point (timed and priced-only planning)
//! - [`scheduler`] — Discrete-event fleet scheduling loop
//! - [`selector`] — Optimal single-trip shipment selection
//! - [`timing`] — Two-decimal delivery time arithmetic

pub mod models;
pub mod plan;
pub mod scheduler;
pub mod selector;
pub mod timing;
