//! Cash flow type for bond valuation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Regular coupon payment
    Coupon,
    /// Principal repayment at (effective) maturity
    Principal,
}

impl fmt::Display for CashFlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowKind::Coupon => "Coupon",
            CashFlowKind::Principal => "Principal",
        };
        write!(f, "{name}")
    }
}

/// A dated cash flow, quoted per 100 of face value.
///
/// A coupon that falls on the redemption date and the principal remain
/// two separate entries sharing that date; they are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Cash flow amount (per 100 of face value)
    amount: Decimal,
    /// Type of cash flow
    kind: CashFlowKind,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: Decimal, kind: CashFlowKind) -> Self {
        Self { date, amount, kind }
    }

    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowKind::Coupon)
    }

    /// Creates a principal cash flow.
    #[must_use]
    pub fn principal(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowKind::Principal)
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the amount per 100 of face value.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the amount as `f64` for discounting arithmetic.
    #[must_use]
    pub fn amount_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(0.0)
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn kind(&self) -> CashFlowKind {
        self.kind
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.amount, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_constructors() {
        let date = Date::from_ymd(2027, 3, 15).unwrap();
        let cf = CashFlow::coupon(date, dec!(2.5));
        assert_eq!(cf.kind(), CashFlowKind::Coupon);
        assert_eq!(cf.amount(), dec!(2.5));

        let principal = CashFlow::principal(date, dec!(100));
        assert_eq!(principal.kind(), CashFlowKind::Principal);
        assert_eq!(principal.date(), date);
    }

    #[test]
    fn test_amount_f64() {
        let date = Date::from_ymd(2027, 3, 15).unwrap();
        let cf = CashFlow::coupon(date, dec!(1.25));
        assert!((cf.amount_f64() - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2027, 3, 15).unwrap();
        let cf = CashFlow::principal(date, dec!(100));
        assert_eq!(cf.to_string(), "2027-03-15 100 Principal");
    }
}
