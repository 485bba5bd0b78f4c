//! # Tenor Curves
//!
//! Zero-coupon discount curves for the Tenor fixed income valuation engine.
//!
//! A [`ZeroCurve`] is built once per valuation date from observed
//! (date, zero rate in percent) pillars and answers spread-adjusted
//! continuous discount factor queries for arbitrary payment dates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
mod zero;

pub use error::{CurveError, CurveResult};
pub use zero::{CurvePillar, ZeroCurve};
