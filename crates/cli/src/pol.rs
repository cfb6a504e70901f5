use numsolve_core::Polynomial;

use crate::{ParseError, lin::Lines};

/// Parses the contents of a `.pol` file.
///
/// The coefficient line must hold exactly `degree + 1` values, highest power
/// first.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending line.
pub fn parse_polynomial(text: &str) -> Result<Polynomial, ParseError> {
    let mut lines = Lines::new(text);

    let degree = lines.count("the polynomial degree")?;
    let coefficients = lines.values(degree + 1, "the coefficients")?;

    Ok(Polynomial::from_descending(coefficients))
}
