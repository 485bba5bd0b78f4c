//! Day count conventions.
//!
//! The engine quotes all time deltas as Actual/365 Fixed year fractions
//! relative to the valuation date. The trait exists as the seam for
//! further conventions; only ACT/365F is implemented.

use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative when `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Counts the days between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 365 days (ignoring leap years).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
