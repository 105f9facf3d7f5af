//! Fixed two-decimal precision helpers.

/// Truncates a value toward zero at two decimal places.
///
/// # Examples
///
/// ```
/// use fleetplan::timing::truncate_hundredths;
///
/// assert_eq!(truncate_hundredths(1.6666), 1.66);
/// assert_eq!(truncate_hundredths(3.999), 3.99);
/// ```
pub fn truncate_hundredths(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Rounds a value to two decimal places (half away from zero).
///
/// # Examples
///
/// ```
/// use fleetplan::timing::round_hundredths;
///
/// assert_eq!(round_hundredths(1.6666), 1.67);
/// assert_eq!(round_hundredths(2.984), 2.98);
/// ```
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
