//! Core domain types for bond exit-scenario analytics.

mod bond_terms;
mod cashflow;
mod date;

pub use bond_terms::{BondTerms, BondTermsBuilder};
pub use cashflow::{CashFlow, CashFlowSchedule, CashFlowType};
pub use date::Date;
