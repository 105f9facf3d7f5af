//! Fleet scheduling: the discrete-event simulation over dispatches and
//! vehicle returns.

mod error;
mod fleet_scheduler;

pub use error::ScheduleError;
pub use fleet_scheduler::FleetScheduler;
