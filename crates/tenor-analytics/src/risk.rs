//! Yield-based risk sensitivities.
//!
//! Duration and convexity are derived from the bond's own cash flows
//! discounted at a flat continuous yield, typically one solved by
//! [`crate::yields::yield_to_maturity`]; the curve plays no part.

use serde::Serialize;

use tenor_core::daycounts::{Act365Fixed, DayCount};
use tenor_core::types::{BondTerms, Date};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::schedule;

/// First- and second-order price sensitivities to a parallel yield shift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskMeasures {
    /// Percentage price change per unit yield change, in years.
    pub modified_duration: f64,
    /// Second-order sensitivity, in years squared.
    pub convexity: f64,
}

/// Computes modified duration and convexity at a flat continuous yield.
///
/// One pass over the cash flows accumulates the discounted price and its
/// first two raw moments in time:
///
/// ```text
/// P  = Σ c_i e^{-y t_i}
/// P' = Σ c_i e^{-y t_i} (-t_i)        D_mod = -P'/P
/// P'' = Σ c_i e^{-y t_i} t_i²         C     =  P''/P
/// ```
///
/// # Errors
///
/// Returns `AnalyticsError::Unpriceable` when the bond has no future
/// cash flows and `AnalyticsError::DegeneratePrice` when the discounted
/// price is exactly zero.
pub fn duration_convexity(
    bond: &BondTerms,
    valuation_date: Date,
    yield_rate: f64,
) -> AnalyticsResult<RiskMeasures> {
    let flows = schedule::cash_flows(bond, valuation_date);
    if flows.is_empty() {
        return Err(AnalyticsError::unpriceable(
            "no future cash flows at the valuation date",
        ));
    }

    let day_count = Act365Fixed;
    let mut price = 0.0;
    let mut first_moment = 0.0;
    let mut second_moment = 0.0;

    for cf in &flows {
        let t = day_count.year_fraction(valuation_date, cf.date());
        let term = cf.amount_f64() * (-yield_rate * t).exp();
        price += term;
        first_moment += term * (-t);
        second_moment += term * t * t;
    }

    if price == 0.0 {
        return Err(AnalyticsError::DegeneratePrice);
    }

    Ok(RiskMeasures {
        modified_duration: -first_moment / price,
        convexity: second_moment / price,
    })
}
