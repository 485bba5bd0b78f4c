//! Interpolation methods.
//!
//! Zero curves are interpolated linearly in (year-fraction, rate) space;
//! [`LinearInterpolator`] is the only method the engine needs. The
//! [`Interpolator`] trait is the seam for adding others.

mod linear;

pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// Trait for one-dimensional interpolation over sorted data.
pub trait Interpolator {
    /// Interpolates the value at `x`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::ExtrapolationNotAllowed` when `x` lies outside
    /// the data range and extrapolation is disabled.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if queries outside the data range are permitted.
    fn allows_extrapolation(&self) -> bool;

    /// Returns the smallest x coordinate.
    fn min_x(&self) -> f64;

    /// Returns the largest x coordinate.
    fn max_x(&self) -> f64;
}
