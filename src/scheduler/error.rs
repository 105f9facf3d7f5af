//! Scheduling errors.

use thiserror::Error;

/// Failure modes of a delivery schedule run.
///
/// Every variant is recoverable by the caller; nothing here is fatal to the
/// host process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The remaining packages cannot fit any vehicle's carry weight, so no
    /// dispatch can make progress.
    #[error("schedule stalled: packages {package_ids:?} exceed the vehicle carry weight")]
    Stalled {
        /// IDs of the packages that could not be assigned.
        package_ids: Vec<String>,
    },
}
