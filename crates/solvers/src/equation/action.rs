/// Control actions an observer can request from a root finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current estimate.
    ///
    /// The solution reports [`Status::StoppedByObserver`](super::Status),
    /// which counts as a failed outcome.
    StopEarly,
}
