//! Bisection on a sign-changing bracket.
//!
//! Each iteration halves the bracket, evaluates the midpoint, and keeps the
//! half across which `f` still changes sign. Convergence is guaranteed for
//! continuous `f`; the cost is one bit of accuracy per evaluation.
//!
//! The solver stops with
//! - [`Status::Converged`] once the bracket half-width drops below `x_tol`,
//! - [`Status::ExactRoot`] if a midpoint evaluates to exactly zero,
//! - [`Status::NoSignChange`] (no estimate, zero iterations) if `f(a)` and
//!   `f(b)` do not have strictly opposite signs,
//! - [`Status::MaxIters`] with the last midpoint otherwise.

use numsolve_core::Observer;

use super::{Action, Config, Error, Event, Solution, Status, bracket::Bracket, check_finite};

/// Finds a root of `f` inside `bracket` using bisection.
///
/// The endpoints may be given in either order.
/// The observer receives an [`Event::Bisection`] for every midpoint.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEstimate`] if either endpoint is NaN or infinite.
pub fn solve<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let [a, b] = bracket;
    check_finite(&bracket)?;

    let (fa, fb) = (f(a), f(b));
    let Some(mut bracket) = Bracket::new(a, fa, b, fb) else {
        return Ok(Solution::no_sign_change());
    };

    // With a zero budget, report the endpoint closer to a root.
    let mut estimate = if fa.abs() <= fb.abs() { a } else { b };
    let mut half_width = bracket.half_width();

    for iter in 1..=config.max_iters() {
        let x = bracket.left() + half_width;
        let fx = f(x);
        estimate = x;

        let event = Event::Bisection {
            iter,
            bracket: bracket.as_array(),
            x,
            residual: fx,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(x, iter, Status::StoppedByObserver));
        }

        #[allow(clippy::float_cmp)]
        if fx == 0.0 {
            return Ok(Solution::new(x, iter, Status::ExactRoot));
        }
        if half_width < config.x_tol() {
            return Ok(Solution::new(x, iter, Status::Converged));
        }

        bracket.shrink(x, fx);
        half_width /= 2.0;
    }

    Ok(Solution::new(estimate, config.max_iters(), Status::MaxIters))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEstimate`] if either endpoint is NaN or infinite.
pub fn solve_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, bracket, config, ())
}
