//! Newton's method from a single estimate.
//!
//! Iterates `x ← x − f(x)/f'(x)`. Convergence is quadratic near a simple root
//! but purely local: there is no bracket to fall back on.
//!
//! The solver stops with
//! - [`Status::Converged`] once the last step `|f(x)/f'(x)|` is below `x_tol`,
//! - [`Status::SmallSlope`] as soon as `|f'(x)| < slope_tol`, keeping `x`,
//! - [`Status::MaxIters`] with the last estimate otherwise.

use numsolve_core::Observer;

use super::{Action, Config, Error, Event, Solution, Status, check_finite};

/// Finds a root of `f` near `x0` using Newton's method.
///
/// `df` must return the derivative of `f`.
/// The observer receives an [`Event::Newton`] after every step.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEstimate`] if `x0` is NaN or infinite.
pub fn solve<F, D, Obs>(
    f: F,
    df: D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    check_finite(&[x0])?;

    let mut x = x0;
    let mut fx = f(x);

    for iter in 1..=config.max_iters() {
        let slope = df(x);
        if slope.abs() < config.slope_tol() {
            return Ok(Solution::new(x, iter, Status::SmallSlope));
        }

        let step = fx / slope;
        x -= step;
        fx = f(x);

        let event = Event::Newton {
            iter,
            x,
            residual: fx,
            slope,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(x, iter, Status::StoppedByObserver));
        }

        if step.abs() < config.x_tol() {
            return Ok(Solution::new(x, iter, Status::Converged));
        }
    }

    Ok(Solution::new(x, config.max_iters(), Status::MaxIters))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEstimate`] if `x0` is NaN or infinite.
pub fn solve_unobserved<F, D>(f: F, df: D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    solve(f, df, x0, config, ())
}
