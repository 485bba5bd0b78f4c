//! Zero-coupon yield curve.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tenor_core::daycounts::{Act365Fixed, DayCount};
use tenor_core::types::Date;
use tenor_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};

/// A single curve pillar: an observed zero rate at a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePillar {
    /// Pillar date.
    pub date: Date,
    /// Zero rate in percent (e.g. 3.25 for 3.25%).
    pub rate: Decimal,
}

impl CurvePillar {
    /// Creates a new pillar.
    #[must_use]
    pub fn new(date: Date, rate: Decimal) -> Self {
        Self { date, rate }
    }
}

/// A zero-coupon yield curve fixed to a valuation date.
///
/// Pillars are observed as (date, zero rate in percent) pairs. At
/// construction they are sorted and converted once into
/// (Actual/365 year fraction, decimal rate) space, where the curve is
/// piecewise linear with linear extrapolation outside the observed
/// tenor range. Discounting is continuous: `df = exp(-(r + s) * t)`.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use tenor_core::types::Date;
/// use tenor_curves::{CurvePillar, ZeroCurve};
///
/// let valuation = Date::from_ymd(2025, 1, 15).unwrap();
/// let curve = ZeroCurve::new(
///     valuation,
///     vec![
///         CurvePillar::new(Date::from_ymd(2026, 1, 15).unwrap(), Decimal::new(30, 1)),
///         CurvePillar::new(Date::from_ymd(2030, 1, 15).unwrap(), Decimal::new(35, 1)),
///     ],
/// )
/// .unwrap();
///
/// let df = curve.discount_factor(Date::from_ymd(2026, 1, 15).unwrap(), 0.0);
/// assert!(df < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    /// Valuation date all year fractions are measured from.
    valuation_date: Date,
    /// Sorted pillars as observed (dates, rates in percent).
    pillars: Vec<CurvePillar>,
    /// Interpolator over (year fraction, decimal rate) pairs.
    interp: LinearInterpolator,
    /// Day count for year fractions.
    day_count: Act365Fixed,
}

impl ZeroCurve {
    /// Minimum number of pillars needed to interpolate.
    pub const MIN_PILLARS: usize = 2;

    /// Builds a curve from observed pillars.
    ///
    /// Pillars may arrive unsorted; they are sorted by date here. The
    /// (year fraction, decimal rate) representation is computed once so
    /// repeated discount factor queries do no date arithmetic.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InsufficientPillars` for fewer than two
    /// pillars and `CurveError::DuplicatePillar` when two pillars share
    /// a date.
    pub fn new(valuation_date: Date, mut pillars: Vec<CurvePillar>) -> CurveResult<Self> {
        if pillars.len() < Self::MIN_PILLARS {
            return Err(CurveError::InsufficientPillars {
                required: Self::MIN_PILLARS,
                actual: pillars.len(),
            });
        }

        pillars.sort_by_key(|p| p.date);
        if let Some(dup) = pillars.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(CurveError::DuplicatePillar {
                date: dup[0].date.to_string(),
            });
        }

        let day_count = Act365Fixed;
        let times: Vec<f64> = pillars
            .iter()
            .map(|p| day_count.year_fraction(valuation_date, p.date))
            .collect();
        let rates: Vec<f64> = pillars
            .iter()
            .map(|p| p.rate.to_f64().unwrap_or(0.0) / 100.0)
            .collect();

        let interp = LinearInterpolator::new(times, rates)?.with_extrapolation();

        Ok(Self {
            valuation_date,
            pillars,
            interp,
            day_count,
        })
    }

    /// Builds a curve from (date, rate-in-percent) pairs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ZeroCurve::new`].
    pub fn from_pairs(valuation_date: Date, pairs: &[(Date, Decimal)]) -> CurveResult<Self> {
        let pillars = pairs
            .iter()
            .map(|&(date, rate)| CurvePillar::new(date, rate))
            .collect();
        Self::new(valuation_date, pillars)
    }

    /// Returns the valuation date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns the sorted pillars.
    #[must_use]
    pub fn pillars(&self) -> &[CurvePillar] {
        &self.pillars
    }

    /// Converts a date to an Actual/365 year fraction from the valuation date.
    #[must_use]
    pub fn year_fraction(&self, date: Date) -> f64 {
        self.day_count.year_fraction(self.valuation_date, date)
    }

    /// Returns the interpolated zero rate (decimal) at a year fraction.
    ///
    /// Extrapolates linearly outside the observed tenor range.
    #[must_use]
    pub fn zero_rate(&self, t: f64) -> f64 {
        // Extrapolation is enabled at construction, so this cannot fail
        self.interp.interpolate(t).unwrap_or(0.0)
    }

    /// Returns the spread-adjusted discount factor for a payment date.
    ///
    /// Dates on or before the valuation date discount to exactly 1.0.
    /// The factor can exceed 1.0 when the effective rate is negative.
    #[must_use]
    pub fn discount_factor(&self, date: Date, spread: f64) -> f64 {
        let t = self.year_fraction(date);
        if t <= 0.0 {
            return 1.0;
        }
        let rate = self.zero_rate(t) + spread;
        (-rate * t).exp()
    }
}
