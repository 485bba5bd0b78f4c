//! Cash flow schedule generation.
//!
//! Schedules are reconstructed from a bond's contractual terms relative
//! to a valuation date, walking coupon dates backward from the effective
//! maturity in `12 / frequency` month steps. The same backward walk
//! drives both the future cash flow schedule and the previous coupon
//! date used for accrued interest, so the two cannot drift apart.
//!
//! Schedules are generated fresh on every call; nothing is cached.

use rust_decimal::Decimal;

use tenor_core::types::{BondTerms, CashFlow, Date, FACE_VALUE};

/// Generates the bond's future cash flows as of a valuation date.
///
/// The result is sorted ascending by date and contains only flows
/// strictly after the valuation date. The principal of 100 at the
/// effective maturity and the coupon falling on that date are two
/// separate entries (the principal first).
///
/// Returns an empty schedule when the bond has no resolvable maturity
/// or the effective maturity is not after the valuation date; an empty
/// schedule means "not priceable", not an error.
///
/// The coupon frequency must be a positive divisor of 12; that is a
/// caller-side precondition and is not checked here.
#[must_use]
pub fn cash_flows(bond: &BondTerms, valuation_date: Date) -> Vec<CashFlow> {
    let Some(maturity) = bond.effective_maturity() else {
        return Vec::new();
    };

    let frequency = bond.frequency();
    let step_months = (12 / frequency) as i32;
    let coupon_amount = FACE_VALUE * bond.coupon_rate() / Decimal::from(frequency);

    let mut flows = vec![CashFlow::principal(maturity, FACE_VALUE)];

    let mut current = maturity;
    while current > valuation_date {
        flows.push(CashFlow::coupon(current, coupon_amount));
        match current.add_months(-step_months) {
            Ok(prev) => current = prev,
            // Fell off the supported calendar range; nothing earlier to emit
            Err(_) => break,
        }
    }

    // Stable sort keeps the principal ahead of the coupon sharing its date
    flows.sort_by_key(|cf| cf.date());
    flows.retain(|cf| cf.date() > valuation_date);
    flows
}

/// Returns the most recent coupon date on or before the valuation date.
///
/// Walks backward from the effective maturity in the same month steps
/// as [`cash_flows`]. `None` when the bond has no resolvable maturity.
#[must_use]
pub fn previous_coupon_date(bond: &BondTerms, valuation_date: Date) -> Option<Date> {
    let maturity = bond.effective_maturity()?;
    let step_months = (12 / bond.frequency()) as i32;

    let mut current = maturity;
    while current > valuation_date {
        match current.add_months(-step_months) {
            Ok(prev) => current = prev,
            Err(_) => return None,
        }
    }
    Some(current)
}
