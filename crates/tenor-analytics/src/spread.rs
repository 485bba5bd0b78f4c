//! Market-implied spread solving.
//!
//! The spread is the constant addition to the zero curve's rate that
//! makes the theoretical clean price match an observed market price.

use log::debug;

use tenor_core::types::BondTerms;
use tenor_curves::ZeroCurve;
use tenor_math::solvers::{newton_raphson_numerical, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing;
use crate::schedule;

/// Default initial guess for the spread search (100 bps).
pub const DEFAULT_SPREAD_GUESS: f64 = 0.01;

/// Spread calculator for bonds priced off a zero curve.
///
/// Solves `clean(s) = market clean price` for the spread `s` with
/// Newton-Raphson, differentiating the pricing objective numerically.
///
/// # Example
///
/// ```rust,ignore
/// let calculator = SpreadCalculator::new(&curve);
/// let spread = calculator.solve(&bond, market_clean_price)?;
/// ```
pub struct SpreadCalculator<'a> {
    /// The zero curve carrying the valuation date.
    curve: &'a ZeroCurve,
    /// Solver configuration.
    config: SolverConfig,
}

impl std::fmt::Debug for SpreadCalculator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadCalculator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> SpreadCalculator<'a> {
    /// Creates a new spread calculator over a curve.
    #[must_use]
    pub fn new(curve: &'a ZeroCurve) -> Self {
        Self {
            curve,
            config: SolverConfig::default(),
        }
    }

    /// Sets the solver tolerance. Default is 1e-10.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum solver iterations. Default is 100.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Solves for the spread implied by a market clean price.
    ///
    /// The result is a continuously-compounded decimal rate (0.0125 for
    /// 125 bps).
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Unpriceable` when the bond has no future
    /// cash flows and `AnalyticsError::SolverFailed` when the root
    /// search does not converge.
    pub fn solve(&self, bond: &BondTerms, market_clean_price: f64) -> AnalyticsResult<f64> {
        if schedule::cash_flows(bond, self.curve.valuation_date()).is_empty() {
            return Err(AnalyticsError::unpriceable(
                "no future cash flows at the valuation date",
            ));
        }

        // The schedule is non-empty, so price() cannot return None; the
        // NaN arm exists to fail the solver loudly rather than panic
        let objective = |s: f64| {
            pricing::price(bond, self.curve, s)
                .map_or(f64::NAN, |p| p.clean - market_clean_price)
        };

        let result = newton_raphson_numerical(objective, DEFAULT_SPREAD_GUESS, &self.config)
            .map_err(|source| AnalyticsError::solver_failed("spread", source))?;

        debug!(
            "spread solve converged to {:.6} in {} iterations (residual {:.2e})",
            result.root, result.iterations, result.residual
        );
        Ok(result.root)
    }
}
