//! # Tenor Analytics
//!
//! Valuation engine for the Tenor fixed income library.
//!
//! Four layered pieces, leaves first:
//!
//! - **Schedules** ([`schedule`]): reconstruct a bond's future coupon and
//!   redemption cash flows relative to a valuation date.
//! - **Pricing** ([`pricing`]): discount the schedule against a
//!   [`tenor_curves::ZeroCurve`] plus spread into dirty price, accrued
//!   interest, and clean price.
//! - **Solving** ([`spread`], [`yields`]): invert clean price to spread
//!   and dirty price to continuous yield with Newton-Raphson.
//! - **Risk** ([`risk`]): modified duration and convexity from the
//!   yield-discounted cash flow set, bypassing the curve.
//!
//! Every operation is a pure function of its inputs; bonds and curves
//! are read-only, so batches of bonds can be valued in parallel by the
//! caller with no coordination.
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tenor_analytics::prelude::*;
//! use tenor_core::types::{BondTerms, Date};
//! use tenor_curves::ZeroCurve;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let valuation = Date::from_ymd(2025, 6, 15)?;
//! let curve = ZeroCurve::from_pairs(
//!     valuation,
//!     &[
//!         (Date::from_ymd(2026, 6, 15)?, dec!(3.0)),
//!         (Date::from_ymd(2035, 6, 15)?, dec!(3.2)),
//!     ],
//! )?;
//! let bond = BondTerms::fixed(Date::from_ymd(2030, 6, 15)?, dec!(5.0), 1);
//!
//! let prices = price(&bond, &curve, 0.0).expect("priceable");
//! let spread = SpreadCalculator::new(&curve).solve(&bond, prices.clean - 1.0)?;
//! let ytm = yield_to_maturity(&bond, valuation, prices.dirty)?;
//! let risk = duration_convexity(&bond, valuation, ytm)?;
//!
//! assert!(spread > 0.0);
//! assert!(risk.modified_duration > 0.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod pricing;
pub mod risk;
pub mod schedule;
pub mod spread;
pub mod yields;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::pricing::{accrued_interest, price, BondPrice};
    pub use crate::risk::{duration_convexity, RiskMeasures};
    pub use crate::schedule::{cash_flows, previous_coupon_date};
    pub use crate::spread::SpreadCalculator;
    pub use crate::yields::{npv_at_yield, yield_to_maturity};
}
