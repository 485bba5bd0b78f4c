//! Core value types: dates, bond terms, cash flows.

mod bond;
mod cashflow;
mod date;

pub use bond::{BondTerms, FACE_VALUE};
pub use cashflow::{CashFlow, CashFlowKind};
pub use date::Date;
