//! # YieldGrid Analytics
//!
//! Calculation engine for bond exit-scenario analysis.
//!
//! This crate turns validated [`BondTerms`](yieldgrid_core::BondTerms)
//! into:
//!
//! - **Cost metrics**: total acquisition cost, gross and net monthly coupon
//! - **Cash flows**: the signed, dated stream for a purchase-hold-sell
//!   scenario
//! - **XIRR**: the annualized internal rate of return of that stream,
//!   solved by Newton-Raphson
//! - **Scenario matrix**: XIRR across the cross product of candidate exit
//!   years and sale prices, with per-cell failure isolation
//!
//! ## Architecture
//!
//! `yieldgrid-analytics` depends on `yieldgrid-core` for types and
//! `yieldgrid-math` for the solver kernel; neither depends back on this
//! crate. All calculations are pure and synchronous — a failed scenario
//! cell never affects its neighbours, and recomputing a matrix is cheap
//! enough to do wholesale on every input change.
//!
//! ## Usage
//!
//! ```rust
//! use yieldgrid_core::prelude::*;
//! use yieldgrid_analytics::prelude::*;
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
//! let matrix = ScenarioMatrixBuilder::new().build(
//!     &terms,
//!     &[1, 3, 5],
//!     &[dec!(95), dec!(100), dec!(105)],
//! );
//! assert_eq!(matrix.cell_count(), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod cashflows;
pub mod cost;
pub mod error;
pub mod scenario;
pub mod xirr;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::CashFlowGenerator;
    pub use crate::cost::{monthly_coupon, net_monthly_coupon, total_cost, CostSummary};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::scenario::{
        CellDiagnostic, MatrixCell, MatrixRow, RateMatrix, ScenarioMatrixBuilder,
    };
    pub use crate::xirr::{xirr, XirrResult, XirrSolver};
}
