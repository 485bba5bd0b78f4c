//! Error types for curve construction and queries.

use thiserror::Error;

use tenor_math::MathError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur when building or querying a curve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Too few pillars to interpolate between.
    #[error("Insufficient curve pillars: need at least {required}, got {actual}")]
    InsufficientPillars {
        /// Minimum required pillars.
        required: usize,
        /// Actual number of pillars.
        actual: usize,
    },

    /// Two pillars share the same date.
    #[error("Duplicate curve pillar at {date}")]
    DuplicatePillar {
        /// The repeated pillar date.
        date: String,
    },

    /// Underlying interpolation failed.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] MathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CurveError::InsufficientPillars {
            required: 2,
            actual: 1,
        };
        assert!(err.to_string().contains("at least 2"));
    }
}
