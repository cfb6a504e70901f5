//! File formats and shared plumbing for the `gaussian` and `polroot` binaries.
//!
//! # Formats
//!
//! A `.lin` file holds a square linear system:
//!
//! ```text
//! 3
//! 2 1 -1
//! -3 -1 2
//! -2 1 2
//! 8 -11 -3
//! ```
//!
//! The first line is the number of unknowns `n`, the next `n` lines are the
//! coefficient rows, and the last line holds the `n` constants.
//!
//! A `.pol` file holds a polynomial as its degree followed by the `n + 1`
//! coefficients from the highest power down:
//!
//! ```text
//! 3
//! 1 0 -1 -2
//! ```
//!
//! Both binaries write their answer next to the input, with the extension
//! replaced by `.sol`.

pub mod logging;

mod error;
mod lin;
mod pol;
mod sol;

pub use error::ParseError;
pub use lin::parse_linear_system;
pub use pol::parse_polynomial;
pub use sol::{format_linear_solution, format_root_solution, solution_path};
