//! # YieldGrid Core
//!
//! Core types and abstractions for the YieldGrid bond exit-scenario
//! analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! YieldGrid:
//!
//! - **Types**: Domain-specific types like `Date`, `BondTerms`, `CashFlow`
//! - **Errors**: Structured error handling for date and term validation
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Validated Construction**: Bond terms cannot exist in an invalid state
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use yieldgrid_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let terms = BondTerms::builder()
//!     .face_value(dec!(100000))
//!     .coupon_rate(dec!(11.9))
//!     .purchase_price(dec!(102.5))
//!     .accrued_interest(dec!(358.63))
//!     .purchase_date(Date::from_ymd(2025, 10, 3).unwrap())
//!     .maturity_date(Date::from_ymd(2030, 12, 31).unwrap())
//!     .tds_rate(dec!(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(terms.max_exit_years(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        BondTerms, BondTermsBuilder, CashFlow, CashFlowSchedule, CashFlowType, Date,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{BondTerms, CashFlow, CashFlowSchedule, Date};
