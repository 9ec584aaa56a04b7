//! Exit-scenario matrix: XIRR across exit years × sale prices.
//!
//! Cells are independent, so a failed cell records a sentinel and a
//! diagnostic while every other cell computes normally. Cells may also be
//! evaluated in parallel (feature `parallel`); ordering of rows, cells,
//! and diagnostics is identical either way.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use yieldgrid_core::BondTerms;
use yieldgrid_math::solvers::SolverConfig;

use crate::cashflows::CashFlowGenerator;
use crate::error::AnalyticsResult;
use crate::xirr::XirrSolver;

/// A single matrix cell: the sale price and the computed rate.
///
/// `rate` is `None` when the cell's calculation failed; the matching
/// [`CellDiagnostic`] says why.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    /// Sale price as a percentage of face value.
    pub sale_price: Decimal,
    /// Annualized rate, or `None` if the cell failed.
    pub rate: Option<f64>,
}

/// One matrix row: all sale-price cells for a single exit year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    /// The exit year this row describes.
    pub exit_year: u32,
    /// Cells ordered by ascending sale price.
    pub cells: Vec<MatrixCell>,
}

/// Human-readable record of a failed cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellDiagnostic {
    /// Exit year of the failing cell.
    pub exit_year: u32,
    /// Sale price of the failing cell.
    pub sale_price: Decimal,
    /// Description of the failure.
    pub reason: String,
}

impl fmt::Display for CellDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exit year {} at {}% of face: {}",
            self.exit_year, self.sale_price, self.reason
        )
    }
}

/// XIRR across the cross product of exit years and sale prices.
///
/// Rows are ordered by ascending exit year, cells by ascending sale
/// price. Rebuilt wholesale on every input change; there is no
/// incremental update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateMatrix {
    /// Rows ordered by ascending exit year.
    rows: Vec<MatrixRow>,
    /// Diagnostics for every failed cell, in row-major cell order.
    diagnostics: Vec<CellDiagnostic>,
}

impl RateMatrix {
    /// Returns the empty "not ready" matrix.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the matrix has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows, ordered by ascending exit year.
    #[must_use]
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Returns the diagnostics recorded for failed cells.
    #[must_use]
    pub fn diagnostics(&self) -> &[CellDiagnostic] {
        &self.diagnostics
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }

    /// Looks up the computed rate for a (year, price) pair.
    ///
    /// Returns `None` when the cell is absent or its calculation failed.
    #[must_use]
    pub fn rate(&self, exit_year: u32, sale_price: Decimal) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.exit_year == exit_year)?
            .cells
            .iter()
            .find(|cell| cell.sale_price == sale_price)?
            .rate
    }
}

/// Builds a [`RateMatrix`] from bond terms and scenario selections.
///
/// # Example
///
/// ```rust
/// use yieldgrid_core::prelude::*;
/// use yieldgrid_analytics::scenario::ScenarioMatrixBuilder;
/// use rust_decimal_macros::dec;
///
/// let terms = BondTerms::builder()
///     .face_value(dec!(100000))
///     .coupon_rate(dec!(11.9))
///     .purchase_price(dec!(102.5))
///     .purchase_date(Date::from_ymd(2025, 10, 3).unwrap())
///     .maturity_date(Date::from_ymd(2030, 12, 31).unwrap())
///     .build()
///     .unwrap();
///
/// let matrix = ScenarioMatrixBuilder::new()
///     .build(&terms, &[1, 3, 5], &[dec!(95), dec!(100)]);
///
/// assert_eq!(matrix.rows().len(), 3);
/// assert!(matrix.rate(5, dec!(100)).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioMatrixBuilder {
    /// Solver configuration handed to each cell's XIRR calculation.
    config: SolverConfig,
}

impl Default for ScenarioMatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioMatrixBuilder {
    /// Creates a builder with the standard XIRR solver settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: XirrSolver::new().config(),
        }
    }

    /// Overrides the solver configuration for every cell.
    #[must_use]
    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the matrix over the cross product of the selections.
    ///
    /// Selections are treated as sets: duplicates are dropped and the
    /// matrix is ordered regardless of input order. If the terms fail
    /// validation or either selection is empty, the result is the empty
    /// matrix with zero diagnostics — "not ready" rather than an error.
    ///
    /// A failing cell records `rate: None` plus a diagnostic; all other
    /// cells still compute.
    #[must_use]
    pub fn build(
        &self,
        terms: &BondTerms,
        exit_years: &[u32],
        sale_prices: &[Decimal],
    ) -> RateMatrix {
        if terms.validate().is_err() || exit_years.is_empty() || sale_prices.is_empty() {
            return RateMatrix::empty();
        }

        let mut years = exit_years.to_vec();
        years.sort_unstable();
        years.dedup();

        let mut prices = sale_prices.to_vec();
        prices.sort_unstable();
        prices.dedup();

        // Row-major cross product; evaluation order never affects results
        let pairs: Vec<(u32, Decimal)> = years
            .iter()
            .flat_map(|&year| prices.iter().map(move |&price| (year, price)))
            .collect();

        let solver = XirrSolver::with_config(self.config);

        #[cfg(feature = "parallel")]
        let outcomes: Vec<AnalyticsResult<f64>> = pairs
            .par_iter()
            .map(|&(year, price)| Self::evaluate_cell(&solver, terms, year, price))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<AnalyticsResult<f64>> = pairs
            .iter()
            .map(|&(year, price)| Self::evaluate_cell(&solver, terms, year, price))
            .collect();

        let mut rows = Vec::with_capacity(years.len());
        let mut diagnostics = Vec::new();

        for (row_index, &year) in years.iter().enumerate() {
            let mut cells = Vec::with_capacity(prices.len());
            for (col_index, &price) in prices.iter().enumerate() {
                let outcome = &outcomes[row_index * prices.len() + col_index];
                match outcome {
                    Ok(rate) => cells.push(MatrixCell {
                        sale_price: price,
                        rate: Some(*rate),
                    }),
                    Err(err) => {
                        log::debug!("scenario cell ({year}, {price}) failed: {err}");
                        cells.push(MatrixCell {
                            sale_price: price,
                            rate: None,
                        });
                        diagnostics.push(CellDiagnostic {
                            exit_year: year,
                            sale_price: price,
                            reason: err.to_string(),
                        });
                    }
                }
            }
            rows.push(MatrixRow {
                exit_year: year,
                cells,
            });
        }

        RateMatrix { rows, diagnostics }
    }

    /// Evaluates one (year, price) cell end to end.
    fn evaluate_cell(
        solver: &XirrSolver,
        terms: &BondTerms,
        exit_year: u32,
        sale_price: Decimal,
    ) -> AnalyticsResult<f64> {
        let flows = CashFlowGenerator::exit_scenario(terms, exit_year, sale_price)?;
        Ok(solver.solve(&flows)?.rate)
    }
}
