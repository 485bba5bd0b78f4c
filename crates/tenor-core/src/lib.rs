//! # Tenor Core
//!
//! Core types for the Tenor fixed income valuation engine.
//!
//! This crate provides the foundational building blocks used throughout Tenor:
//!
//! - **Types**: `Date`, `BondTerms`, `CashFlow`
//! - **Day Count Conventions**: Actual/365 Fixed year fractions
//! - **Errors**: the shared `CoreError` type
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let maturity = Date::from_ymd(2030, 6, 15).unwrap();
//! let bond = BondTerms::fixed(maturity, Decimal::new(5, 0), 1);
//! assert_eq!(bond.effective_maturity(), Some(maturity));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod daycounts;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::Date;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{BondTerms, CashFlow, CashFlowKind, Date, FACE_VALUE};
}
