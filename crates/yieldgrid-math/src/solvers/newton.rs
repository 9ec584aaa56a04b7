//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This method has quadratic convergence near the root but requires
/// the derivative of the function.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error if convergence fails.
///
/// # Example
///
/// ```rust
/// use yieldgrid_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    newton_raphson_bounded(
        f,
        df,
        initial_guess,
        (f64::NEG_INFINITY, f64::INFINITY),
        config,
    )
}

/// Newton-Raphson iteration confined to a sane numeric envelope.
///
/// Identical to [`newton_raphson`] except that the iteration fails with
/// [`MathError::Diverged`] the moment an iterate leaves `(lo, hi)`,
/// rather than continuing toward a root that is meaningless to the caller.
/// Rate solvers use this to abort once the implied discount multiplier
/// stops making financial sense.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point, must lie within the bounds
/// * `bounds` - The `(lo, hi)` envelope iterates must stay inside
/// * `config` - Solver configuration
pub fn newton_raphson_bounded<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (lo, hi) = bounds;
    if lo >= hi {
        return Err(MathError::invalid_input(format!(
            "bounds must satisfy lo < hi, got [{lo}, {hi}]"
        )));
    }
    if initial_guess < lo || initial_guess > hi {
        return Err(MathError::invalid_input(format!(
            "initial guess {initial_guess} outside bounds [{lo}, {hi}]"
        )));
    }

    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        // Check for convergence
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);

        // Flat slope: dividing would throw the iterate arbitrarily far
        if dfx.abs() < config.tolerance {
            return Err(MathError::DerivativeVanished {
                iteration,
                value: dfx,
            });
        }

        // Newton step
        let step = fx / dfx;
        x -= step;

        if x < lo || x > hi {
            return Err(MathError::Diverged { value: x, lo, hi });
        }

        // Check for step convergence
        if step.abs() < config.tolerance {
            let final_fx = f(x);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}
