//! Two-decimal time arithmetic for delivery scheduling.
//!
//! Delivery durations are truncated to two decimal places while arrival times
//! are rounded; the two operations are deliberately different and must stay
//! that way for schedule output to stay numerically compatible with existing
//! consumers.

mod delivery;
mod precision;

pub use delivery::DeliveryTiming;
pub use precision::{round_hundredths, truncate_hundredths};
