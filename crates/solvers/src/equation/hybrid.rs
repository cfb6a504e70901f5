//! Bisection with a bounded Newton refinement.
//!
//! # Algorithm
//!
//! Each iteration bisects the current bracket at `c` and keeps the sign-changing
//! half, exactly like [`bisection`](super::bisection). From the third iteration
//! on, it also takes a single Newton step from `c` by calling
//! [`newton::solve_unobserved`] with a one-iteration budget. The Newton estimate
//! is accepted as the answer when it falls strictly inside the updated bracket
//! and has a smaller residual than `c`.
//!
//! The bracket keeps the search from diverging; the Newton step lets it finish
//! long before the bracket is small.
//!
//! # Termination
//!
//! - [`Status::Converged`] when `|f(c)| < x_tol`
//! - [`Status::NewtonAccepted`] when the Newton step is accepted
//! - [`Status::NoSignChange`] (no estimate, zero iterations) for a bad bracket
//! - [`Status::MaxIters`] with the last midpoint otherwise
//!
//! Note the accepted Newton estimate only has to improve on `c`; it is not
//! itself checked against `x_tol`.

use numsolve_core::Observer;

use super::{
    Action, Config, Error, Event, Solution, Status, bracket::Bracket, check_finite, newton,
};

/// Iterations that only bisect before Newton refinement starts.
const BISECTION_ONLY_ITERS: usize = 2;

/// Finds a root of `f` inside `bracket` using the hybrid method.
///
/// `df` must return the derivative of `f`.
/// The observer receives an [`Event::Hybrid`] for every midpoint; the inner
/// Newton step is not observed.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEstimate`] if either endpoint is NaN or infinite.
pub fn solve<F, D, Obs>(
    f: F,
    df: D,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let [a, b] = bracket;
    check_finite(&bracket)?;

    let (fa, fb) = (f(a), f(b));
    let Some(mut bracket) = Bracket::new(a, fa, b, fb) else {
        return Ok(Solution::no_sign_change());
    };

    let refine = config.single_newton_step();
    let mut estimate = if fa.abs() <= fb.abs() { a } else { b };

    for iter in 1..=config.max_iters() {
        let c = bracket.midpoint();
        let fc = f(c);
        estimate = c;

        let event = Event::Hybrid {
            iter,
            bracket: bracket.as_array(),
            x: c,
            residual: fc,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(c, iter, Status::StoppedByObserver));
        }

        if fc.abs() < config.x_tol() {
            return Ok(Solution::new(c, iter, Status::Converged));
        }

        bracket.shrink(c, fc);

        if iter <= BISECTION_ONLY_ITERS {
            continue;
        }

        // A Newton step that cannot start offers no candidate.
        let candidate = newton::solve_unobserved(&f, &df, c, &refine)
            .ok()
            .and_then(|step| step.x);
        if let Some(x) = candidate
            && bracket.contains(x)
            && f(x).abs() < fc.abs()
        {
            return Ok(Solution::new(x, iter, Status::NewtonAccepted));
        }
    }

    Ok(Solution::new(estimate, config.max_iters(), Status::MaxIters))
}

/// Runs the hybrid method without observation.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEstimate`] if either endpoint is NaN or infinite.
pub fn solve_unobserved<F, D>(
    f: F,
    df: D,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    solve(f, df, bracket, config, ())
}
