//! Bond pricing against a zero curve.

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use tenor_core::types::{BondTerms, Date};
use tenor_curves::ZeroCurve;

use crate::schedule;

/// Dirty price, accrued interest, and clean price, per 100 of face value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondPrice {
    /// Present value of all future cash flows.
    pub dirty: f64,
    /// Coupon interest accumulated since the previous coupon date.
    pub accrued: f64,
    /// Dirty price minus accrued interest; the quoted market price.
    pub clean: f64,
}

/// Prices a bond off the curve at a given spread.
///
/// Discounts every future cash flow with the spread-adjusted curve and
/// subtracts accrued interest for the clean price. The valuation date is
/// the curve's. Returns `None` when the bond has no future cash flows
/// (no resolvable maturity, or already redeemed) - the instrument is not
/// priceable and no error is raised.
///
/// Pure function of its inputs; neither the bond nor the curve is mutated.
#[must_use]
pub fn price(bond: &BondTerms, curve: &ZeroCurve, spread: f64) -> Option<BondPrice> {
    let valuation_date = curve.valuation_date();

    let flows = schedule::cash_flows(bond, valuation_date);
    if flows.is_empty() {
        return None;
    }

    let dirty: f64 = flows
        .iter()
        .map(|cf| cf.amount_f64() * curve.discount_factor(cf.date(), spread))
        .sum();

    let accrued = accrued_interest(bond, valuation_date);

    Some(BondPrice {
        dirty,
        accrued,
        clean: dirty - accrued,
    })
}

/// Accrued interest per 100 of face value at the valuation date.
///
/// Prorates the full annual coupon by the Actual/365 fraction of days
/// since the previous coupon date, which is derived from the same
/// backward walk as the cash flow schedule. Zero when the bond has no
/// resolvable maturity.
#[must_use]
pub fn accrued_interest(bond: &BondTerms, valuation_date: Date) -> f64 {
    let Some(prev_coupon) = schedule::previous_coupon_date(bond, valuation_date) else {
        return 0.0;
    };

    let days = prev_coupon.days_between(&valuation_date).max(0);
    let rate = bond.coupon_rate().to_f64().unwrap_or(0.0);

    100.0 * rate * days as f64 / 365.0
}
