//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Root-finding algorithm exhausted its iteration budget.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// The derivative became too flat to divide by safely.
    #[error("Derivative vanished at iteration {iteration} (value: {value:.2e})")]
    DerivativeVanished {
        /// Iteration at which the slope flattened.
        iteration: u32,
        /// The near-zero derivative value.
        value: f64,
    },

    /// The iterate left the caller's sane numeric envelope.
    #[error("Iterate {value:.4} left the bounds [{lo}, {hi}]")]
    Diverged {
        /// The out-of-bounds iterate.
        value: f64,
        /// Lower bound of the envelope.
        lo: f64,
        /// Upper bound of the envelope.
        hi: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
