//! Error types for the valuation engine.
//!
//! The solvers distinguish an instrument that cannot be priced at all
//! from a root search that failed to converge, so callers get a reason
//! rather than a bare not-a-number marker.

use thiserror::Error;

use tenor_math::MathError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors produced by pricing, spread, yield, and risk calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// The bond has no future cash flows to discount.
    #[error("bond is not priceable: {reason}")]
    Unpriceable {
        /// Why the instrument cannot be priced.
        reason: String,
    },

    /// A root search failed to converge or hit a numerical singularity.
    #[error("{quantity} solver failed: {source}")]
    SolverFailed {
        /// The quantity being solved for ("spread" or "yield").
        quantity: &'static str,
        /// The underlying numerical failure.
        #[source]
        source: MathError,
    },

    /// Discounted price is zero, leaving duration and convexity undefined.
    #[error("price is zero: duration and convexity are undefined")]
    DegeneratePrice,
}

impl AnalyticsError {
    /// Creates an unpriceable instrument error.
    #[must_use]
    pub fn unpriceable(reason: impl Into<String>) -> Self {
        Self::Unpriceable {
            reason: reason.into(),
        }
    }

    /// Creates a solver failure error.
    #[must_use]
    pub fn solver_failed(quantity: &'static str, source: MathError) -> Self {
        Self::SolverFailed { quantity, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AnalyticsError::unpriceable("no resolvable maturity");
        assert!(err.to_string().contains("not priceable"));

        let err =
            AnalyticsError::solver_failed("spread", MathError::convergence_failed(100, 1e-3));
        assert!(err.to_string().contains("spread solver failed"));
    }
}
