//! Bond contractual terms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Date;

/// Face value all cash flow amounts are quoted against (100 units).
pub const FACE_VALUE: Decimal = Decimal::ONE_HUNDRED;

/// Contractual terms of a fixed coupon bond.
///
/// This is an immutable input record: the engine never mutates it, and
/// every pricing call receives it by reference. Loading and validation of
/// the external record format is the caller's responsibility.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{BondTerms, Date};
/// use rust_decimal::Decimal;
///
/// let bond = BondTerms::fixed(
///     Date::from_ymd(2030, 6, 15).unwrap(),
///     Decimal::new(425, 2), // 4.25% annual coupon
///     2,                    // semi-annual
/// );
/// assert_eq!(bond.frequency(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Stated maturity date, absent for perpetuals.
    pub maturity: Option<Date>,
    /// Next call date, absent for non-callable bonds without a call schedule.
    pub next_call: Option<Date>,
    /// Whether the issuer can call the bond at the next call date.
    pub callable: bool,
    /// Annual coupon rate as a percentage of face value (e.g. 4.25 for 4.25%).
    pub coupon: Decimal,
    /// Coupon payments per year. `None` defaults to annual.
    ///
    /// Must be a positive integer dividing 12 evenly; zero is invalid
    /// input and must be rejected before reaching the engine.
    pub coupon_frequency: Option<u32>,
}

impl BondTerms {
    /// Creates terms for a plain fixed coupon bond.
    #[must_use]
    pub fn fixed(maturity: Date, coupon: Decimal, frequency: u32) -> Self {
        Self {
            maturity: Some(maturity),
            next_call: None,
            callable: false,
            coupon,
            coupon_frequency: Some(frequency),
        }
    }

    /// Creates terms for a callable bond redeemed at its next call date.
    #[must_use]
    pub fn callable(
        maturity: Option<Date>,
        next_call: Date,
        coupon: Decimal,
        frequency: u32,
    ) -> Self {
        Self {
            maturity,
            next_call: Some(next_call),
            callable: true,
            coupon,
            coupon_frequency: Some(frequency),
        }
    }

    /// Resolves the date the bond is assumed to redeem on.
    ///
    /// Callable bonds and perpetuals (no stated maturity) redeem at the
    /// next call date when one exists; otherwise the stated maturity is
    /// used. Returns `None` when neither date is available, in which case
    /// the bond is not priceable.
    #[must_use]
    pub fn effective_maturity(&self) -> Option<Date> {
        if self.callable || self.maturity.is_none() {
            if let Some(call) = self.next_call {
                return Some(call);
            }
        }
        self.maturity
    }

    /// Annual coupon rate as a decimal fraction (e.g. 0.0425).
    #[must_use]
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon / FACE_VALUE
    }

    /// Coupon payments per year, defaulting to annual when unspecified.
    #[must_use]
    pub fn frequency(&self) -> u32 {
        self.coupon_frequency.unwrap_or(1)
    }
}
