use numsolve_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// One recorded solver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate {
    pub x: f64,
    pub residual: f64,
}

/// An observer that collects the estimate and residual of every iteration.
///
/// Pass `&mut Recorder` as the solver observer to keep the recorder available
/// after the solve completes.
///
/// # Example
///
/// ```
/// use numsolve_observers::Recorder;
/// use numsolve_solvers::equation::{Config, newton};
///
/// let mut recorder = Recorder::new();
/// let solution = newton::solve(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     1.0,
///     &Config::default(),
///     &mut recorder,
/// )
/// .expect("finite estimates");
///
/// assert_eq!(recorder.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    iterates: Vec<Iterate>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single iterate.
    pub fn record(&mut self, x: f64, residual: f64) {
        self.iterates.push(Iterate { x, residual });
    }

    /// Returns the recorded iterates in order.
    #[must_use]
    pub fn iterates(&self) -> &[Iterate] {
        &self.iterates
    }

    /// Returns the most recent iterate.
    #[must_use]
    pub fn last(&self) -> Option<&Iterate> {
        self.iterates.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Consumes the recorder, returning the iterates.
    #[must_use]
    pub fn into_iterates(self) -> Vec<Iterate> {
        self.iterates
    }
}

impl<E, A> Observer<E, A> for Recorder
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.estimate(), event.residual());
        None
    }
}

/// Allows `&mut Recorder` to be passed to solvers that take an observer by
/// value, so the iterates can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut Recorder
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
