//! The secant method from two estimates.
//!
//! Replaces Newton's derivative with the slope through the two most recent
//! points. The points need not bracket a root, so the iteration can wander or
//! diverge; only the iteration budget bounds it.
//!
//! The solver stops with
//! - [`Status::Converged`] once the secant step is below `x_tol`,
//! - [`Status::FlatSecant`] if both points have the same function value,
//! - [`Status::MaxIters`] with the latest estimate otherwise.

use std::mem;

use numsolve_core::Observer;

use super::{Action, Config, Error, Event, Solution, Status, check_finite};

/// Finds a root of `f` starting from two estimates using the secant method.
///
/// The observer receives an [`Event::Secant`] for every computed step.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEstimate`] if either estimate is NaN or infinite.
pub fn solve<F, Obs>(
    f: F,
    estimates: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    check_finite(&estimates)?;

    let [mut a, mut b] = estimates;
    let (mut fa, mut fb) = (f(a), f(b));

    for iter in 1..=config.max_iters() {
        // Keep `a` as the point with the smaller residual.
        if fa.abs() > fb.abs() {
            mem::swap(&mut a, &mut b);
            mem::swap(&mut fa, &mut fb);
        }

        #[allow(clippy::float_cmp)]
        if fa == fb {
            let status = if fa == 0.0 {
                Status::Converged
            } else {
                Status::FlatSecant
            };
            return Ok(Solution::new(a, iter, status));
        }

        let step = (b - a) / (fb - fa) * fa;

        let event = Event::Secant {
            iter,
            x: a,
            residual: fa,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(a, iter, Status::StoppedByObserver));
        }

        b = a;
        fb = fa;

        if step.abs() < config.x_tol() {
            return Ok(Solution::new(a, iter, Status::Converged));
        }

        a -= step;
        fa = f(a);
    }

    Ok(Solution::new(a, config.max_iters(), Status::MaxIters))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEstimate`] if either estimate is NaN or infinite.
pub fn solve_unobserved<F>(f: F, estimates: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, estimates, config, ())
}
