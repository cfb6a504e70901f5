//! Reusable observers for the numsolve root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the equation solvers in `numsolve-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasEstimate`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Tracing`] — emits one `tracing` debug event per iteration
//! - [`Recorder`] — collects every iterate for later inspection
//! - [`ResidualStop`] — stops a solver once the residual is small enough
//!
//! [`Observer`]: numsolve_core::Observer
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod residual_stop;
mod trace;

pub use recorder::{Iterate, Recorder};
pub use residual_stop::ResidualStop;
pub use trace::Tracing;
