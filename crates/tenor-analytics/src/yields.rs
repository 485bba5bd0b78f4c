//! Continuous yield to maturity.
//!
//! The yield solve is independent of the discount curve: it finds the
//! single flat continuously-compounded rate equating the present value
//! of the bond's own cash flows to a market dirty price.

use log::debug;

use tenor_core::daycounts::{Act365Fixed, DayCount};
use tenor_core::types::{BondTerms, CashFlow, Date};
use tenor_math::solvers::{newton_raphson_numerical, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::schedule;

/// Default initial guess for the yield search (5% continuous).
pub const DEFAULT_YIELD_GUESS: f64 = 0.05;

/// Present value of a cash flow set at a flat continuous yield.
///
/// Times are Actual/365 year fractions from the valuation date.
#[must_use]
pub fn npv_at_yield(flows: &[CashFlow], valuation_date: Date, yield_rate: f64) -> f64 {
    let day_count = Act365Fixed;
    flows
        .iter()
        .map(|cf| {
            let t = day_count.year_fraction(valuation_date, cf.date());
            cf.amount_f64() * (-yield_rate * t).exp()
        })
        .sum()
}

/// Solves for the continuously-compounded yield to maturity.
///
/// Uses Newton-Raphson from [`DEFAULT_YIELD_GUESS`] with the default
/// solver configuration (tolerance 1e-10, 100 iterations).
///
/// # Errors
///
/// Returns `AnalyticsError::Unpriceable` when the bond has no future
/// cash flows and `AnalyticsError::SolverFailed` when the root search
/// does not converge.
pub fn yield_to_maturity(
    bond: &BondTerms,
    valuation_date: Date,
    market_dirty_price: f64,
) -> AnalyticsResult<f64> {
    yield_to_maturity_with_config(
        bond,
        valuation_date,
        market_dirty_price,
        &SolverConfig::default(),
    )
}

/// Solves for the continuous yield with an explicit solver configuration.
///
/// # Errors
///
/// Same failure modes as [`yield_to_maturity`].
pub fn yield_to_maturity_with_config(
    bond: &BondTerms,
    valuation_date: Date,
    market_dirty_price: f64,
    config: &SolverConfig,
) -> AnalyticsResult<f64> {
    let flows = schedule::cash_flows(bond, valuation_date);
    if flows.is_empty() {
        return Err(AnalyticsError::unpriceable(
            "no future cash flows at the valuation date",
        ));
    }

    let objective = |y: f64| npv_at_yield(&flows, valuation_date, y) - market_dirty_price;

    let result = newton_raphson_numerical(objective, DEFAULT_YIELD_GUESS, config)
        .map_err(|source| AnalyticsError::solver_failed("yield", source))?;

    debug!(
        "yield solve converged to {:.6} in {} iterations (residual {:.2e})",
        result.root, result.iterations, result.residual
    );
    Ok(result.root)
}
