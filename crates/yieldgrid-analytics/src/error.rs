//! Unified error types for the analytics engine.
//!
//! The matrix builder downgrades these to per-cell diagnostics; everywhere
//! else they propagate immediately through `Result`.

use thiserror::Error;

use yieldgrid_core::CoreError;
use yieldgrid_math::MathError;

/// Unified error type for all analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    // ========== Input Errors ==========
    /// A term or selection violates a static range or sign constraint.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Exit year exceeds what the maturity date allows.
    #[error("exit year {exit_year} is outside the achievable range 1..={max_years}")]
    ScenarioOutOfRange {
        /// The requested exit year.
        exit_year: u32,
        /// Maximum achievable holding period in whole years.
        max_years: u32,
    },

    // ========== Solver Errors ==========
    /// Too few cash flows to imply a rate.
    #[error("insufficient cash flows: need at least {required}, got {actual}")]
    InsufficientCashFlows {
        /// Minimum required flows.
        required: usize,
        /// Actual number of flows.
        actual: usize,
    },

    /// The cash-flow shape cannot yield a finite rate.
    #[error("degenerate cash flows: {0}")]
    DegenerateCashFlows(String),

    /// Newton-Raphson did not satisfy the convergence test within budget.
    #[error("XIRR did not converge after {iterations} iterations: {reason}")]
    NonConvergence {
        /// Number of iterations before failure.
        iterations: u32,
        /// Reason for failure.
        reason: String,
    },

    /// The rate estimate left the sane numeric envelope.
    #[error("XIRR estimate {rate:.4} diverged outside the sane rate range")]
    Divergence {
        /// The out-of-range rate estimate.
        rate: f64,
    },
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidDate { message } => AnalyticsError::InvalidDate(message),
            CoreError::InvalidTerms { reason } => AnalyticsError::InvalidInput(reason),
        }
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => AnalyticsError::NonConvergence {
                iterations,
                reason: format!("iteration budget exhausted (residual {residual:.2e})"),
            },
            MathError::DerivativeVanished { iteration, value } => AnalyticsError::NonConvergence {
                iterations: iteration,
                reason: format!("NPV slope flattened to {value:.2e}"),
            },
            MathError::Diverged { value, .. } => AnalyticsError::Divergence { rate: value },
            MathError::InvalidInput { reason } => AnalyticsError::InvalidInput(reason),
        }
    }
}
