use thiserror::Error;

/// Errors that prevent a root finder from starting.
///
/// A [`Config`](super::Config) is validated when it is built, so only the
/// initial estimates are checked here.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial estimate is not finite: {value}")]
    NonFiniteEstimate { value: f64 },
}
