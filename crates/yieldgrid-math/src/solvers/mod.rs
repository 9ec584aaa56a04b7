//! Root-finding algorithms.
//!
//! This module provides the Newton-Raphson solver used for internal rate
//! of return calculations:
//!
//! - [`newton_raphson`]: fast quadratic convergence when a derivative is
//!   available
//! - [`newton_raphson_bounded`]: the same iteration, aborting the moment
//!   an iterate leaves a caller-supplied envelope
//!
//! # Example: IRR-style Calculation
//!
//! ```rust
//! use yieldgrid_math::solvers::{newton_raphson, SolverConfig};
//!
//! // Invest 100 now, receive 110 in one year: NPV(r) = -100 + 110/(1+r)
//! let f = |r: f64| -100.0 + 110.0 / (1.0 + r);
//! let df = |r: f64| -110.0 / ((1.0 + r) * (1.0 + r));
//!
//! let result = newton_raphson(f, df, 0.05, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.10).abs() < 1e-8);
//! ```

mod newton;

pub use newton::{newton_raphson, newton_raphson_bounded};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
///
/// The tolerance doubles as the flat-slope guard: a derivative smaller in
/// magnitude than `tolerance` is treated as unsafe to divide by.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }
}
