use numsolve_core::Observer;
use numsolve_solvers::equation::Event;
use tracing::debug;

/// An observer that logs every solver iteration through `tracing`.
///
/// Each event becomes one `DEBUG` record under the `numsolve::iter` target,
/// with the method name and the event's numeric fields as structured fields.
/// The observer never acts, so attaching it does not change the result.
///
/// # Example
///
/// ```
/// use numsolve_observers::Tracing;
/// use numsolve_solvers::equation::{Config, bisection};
///
/// let solution = bisection::solve(|x| x * x - 2.0, [0.0, 2.0], &Config::default(), Tracing)
///     .expect("finite estimates");
/// assert!(solution.is_success());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tracing;

impl<A> Observer<Event, A> for Tracing {
    fn observe(&mut self, event: &Event) -> Option<A> {
        match *event {
            Event::Bisection {
                iter,
                bracket: [left, right],
                x,
                residual,
            } => debug!(target: "numsolve::iter", method = "bisection", iter, left, right, x, residual),
            Event::Newton {
                iter,
                x,
                residual,
                slope,
                step,
            } => debug!(target: "numsolve::iter", method = "newton", iter, x, residual, slope, step),
            Event::Secant {
                iter,
                x,
                residual,
                step,
            } => debug!(target: "numsolve::iter", method = "secant", iter, x, residual, step),
            Event::Hybrid {
                iter,
                bracket: [left, right],
                x,
                residual,
            } => debug!(target: "numsolve::iter", method = "hybrid", iter, left, right, x, residual),
        }
        None
    }
}
