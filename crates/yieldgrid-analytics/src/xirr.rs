//! Annualized internal rate of return for irregular cash flows.
//!
//! Solves `NPV(r) = Σ amountᵢ × (1+r)^(−yearsᵢ) = 0` by Newton-Raphson,
//! where `yearsᵢ` measures from the earliest cash flow using a fixed
//! 365.25-day year. That fixed year length is a deliberate simplification:
//! it ignores actual leap-day counts and diverges slightly from actuarial
//! day-count conventions (Act/365, 30/360). Changing it would change every
//! computed rate.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use yieldgrid_core::CashFlowSchedule;
use yieldgrid_math::solvers::{newton_raphson_bounded, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Fixed year length, in days, for the annualization basis.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Lowest admissible rate estimate (implied multiplier 0.01x).
const MIN_RATE: f64 = -0.99;

/// Highest admissible rate estimate (implied multiplier 11x).
const MAX_RATE: f64 = 10.0;

/// Initial guess: a reasonable bond-yield prior.
const INITIAL_GUESS: f64 = 0.10;

/// Convergence tolerance on NPV, step size, and the flat-slope guard.
const XIRR_TOLERANCE: f64 = 1e-6;

/// Iteration budget.
const XIRR_MAX_ITERATIONS: u32 = 100;

/// Result of an XIRR calculation.
#[derive(Debug, Clone, Copy)]
pub struct XirrResult {
    /// The annualized rate (as a decimal, e.g., 0.10 for 10%).
    pub rate: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final residual NPV (should be near zero).
    pub residual: f64,
}

/// XIRR solver.
///
/// Each invocation is an independent pure computation; no state is
/// retained between calls, so a single solver can evaluate many scenarios
/// in rapid succession.
///
/// # Example
///
/// ```rust
/// use yieldgrid_core::prelude::*;
/// use yieldgrid_analytics::xirr::XirrSolver;
/// use rust_decimal_macros::dec;
///
/// let mut flows = CashFlowSchedule::new();
/// flows.push(CashFlow::purchase(Date::from_ymd(2025, 1, 1).unwrap(), dec!(100)));
/// flows.push(CashFlow::coupon(Date::from_ymd(2026, 1, 1).unwrap(), dec!(110)));
///
/// let result = XirrSolver::new().solve(&flows).unwrap();
/// assert!((result.rate - 0.10).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct XirrSolver {
    /// Solver configuration.
    config: SolverConfig,
}

impl Default for XirrSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl XirrSolver {
    /// Creates a new solver with the standard XIRR settings.
    ///
    /// Default tolerance: 1e-6
    /// Default max iterations: 100
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(XIRR_TOLERANCE, XIRR_MAX_ITERATIONS),
        }
    }

    /// Creates a solver from an explicit configuration.
    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = SolverConfig::new(tolerance, self.config.max_iterations);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = SolverConfig::new(self.config.tolerance, max_iterations);
        self
    }

    /// Solves for the annualized rate that zeroes the stream's NPV.
    ///
    /// # Errors
    ///
    /// - `InsufficientCashFlows` when fewer than 2 flows are given
    /// - `DegenerateCashFlows` when no sign change exists (all inflows or
    ///   all outflows)
    /// - `NonConvergence` when the iteration budget is exhausted or the
    ///   NPV slope flattens
    /// - `Divergence` when the estimate drops below −0.99 or exceeds 10
    ///   (implied multiplier at or under 0.01x, or over 11x)
    pub fn solve(&self, schedule: &CashFlowSchedule) -> AnalyticsResult<XirrResult> {
        if schedule.len() < 2 {
            return Err(AnalyticsError::InsufficientCashFlows {
                required: 2,
                actual: schedule.len(),
            });
        }

        // The generator emits date-ordered flows, but do not rely on it
        let mut flows = schedule.clone();
        flows.sort_by_date();

        let has_outflow = flows.iter().any(|cf| cf.amount() < Decimal::ZERO);
        let has_inflow = flows.iter().any(|cf| cf.amount() > Decimal::ZERO);
        if !has_outflow || !has_inflow {
            return Err(AnalyticsError::DegenerateCashFlows(
                "need at least one inflow and one outflow".to_string(),
            ));
        }

        let t0 = flows
            .first()
            .map(|cf| cf.date())
            .ok_or_else(|| AnalyticsError::invalid_input("empty schedule"))?;

        // Convert to f64 for the solver kernel
        let cf_data: Vec<(f64, f64)> = flows
            .iter()
            .map(|cf| {
                let years = t0.days_between(&cf.date()) as f64 / DAYS_PER_YEAR;
                (years, cf.amount().to_f64().unwrap_or(0.0))
            })
            .collect();

        let npv = |r: f64| {
            cf_data
                .iter()
                .map(|&(t, amount)| amount * (1.0 + r).powf(-t))
                .sum::<f64>()
        };
        let npv_derivative = |r: f64| {
            cf_data
                .iter()
                .map(|&(t, amount)| -t * amount * (1.0 + r).powf(-t - 1.0))
                .sum::<f64>()
        };

        let result = newton_raphson_bounded(
            npv,
            npv_derivative,
            INITIAL_GUESS,
            (MIN_RATE, MAX_RATE),
            &self.config,
        )?;

        Ok(XirrResult {
            rate: result.root,
            iterations: result.iterations,
            residual: result.residual,
        })
    }
}

/// Convenience wrapper: solves with standard settings and returns the
/// rate alone.
///
/// # Errors
///
/// Same as [`XirrSolver::solve`].
pub fn xirr(schedule: &CashFlowSchedule) -> AnalyticsResult<f64> {
    XirrSolver::new().solve(schedule).map(|result| result.rate)
}
