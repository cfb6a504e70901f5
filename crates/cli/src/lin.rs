use numsolve_solvers::linear::LinearSystem;

use crate::ParseError;

/// Parses the contents of a `.lin` file.
///
/// Lines after the constants are ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending line if a line is missing,
/// a value does not parse, or a row has the wrong number of values.
pub fn parse_linear_system(text: &str) -> Result<LinearSystem, ParseError> {
    let mut lines = Lines::new(text);

    let n = lines.count("the number of unknowns")?;
    let rows = (0..n)
        .map(|_| lines.values(n, "a coefficient row"))
        .collect::<Result<Vec<_>, _>>()?;
    let constants = lines.values(n, "the constants")?;

    Ok(LinearSystem::from_rows(&rows, constants)?)
}

/// A line cursor that remembers the current 1-based line number.
pub(crate) struct Lines<'a> {
    inner: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        self.line += 1;
        self.inner.next().ok_or(ParseError::MissingLine {
            line: self.line,
            expected,
        })
    }

    /// Reads a line holding a single non-negative integer.
    pub(crate) fn count(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let token = self.next_line(expected)?.trim();
        token.parse().map_err(|_| ParseError::InvalidCount {
            line: self.line,
            token: token.to_owned(),
        })
    }

    /// Reads a line holding exactly `n` whitespace-separated numbers.
    pub(crate) fn values(
        &mut self,
        n: usize,
        expected: &'static str,
    ) -> Result<Vec<f64>, ParseError> {
        let line = self.line + 1;
        let values = self
            .next_line(expected)?
            .split_whitespace()
            .map(|token| {
                token.parse().map_err(|_| ParseError::InvalidNumber {
                    line,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if values.len() != n {
            return Err(ParseError::WrongCount {
                line,
                expected: n,
                got: values.len(),
            });
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;
    use numsolve_solvers::linear;

    #[test]
    fn parses_a_system() {
        let system = parse_linear_system("2\n1 2\n3 4\n5 6\n").expect("valid file");

        assert_eq!(system.coefficients(), &array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(system.constants(), &array![5.0, 6.0]);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let system = parse_linear_system(" 2 \n  1\t2\n3   4  \n5 6").expect("valid file");
        assert_eq!(system.dim(), 2);
    }

    #[test]
    fn reports_the_offending_line() {
        assert_eq!(
            parse_linear_system("2\n1 2\n3 x\n5 6\n"),
            Err(ParseError::InvalidNumber {
                line: 3,
                token: "x".into()
            })
        );
        assert_eq!(
            parse_linear_system("2\n1 2\n3\n5 6\n"),
            Err(ParseError::WrongCount {
                line: 3,
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            parse_linear_system("2\n1 2\n3 4\n"),
            Err(ParseError::MissingLine {
                line: 4,
                expected: "the constants"
            })
        );
        assert_eq!(
            parse_linear_system("two\n"),
            Err(ParseError::InvalidCount {
                line: 1,
                token: "two".into()
            })
        );
    }

    #[test]
    fn rejects_an_empty_system() {
        assert_eq!(
            parse_linear_system("0\n\n"),
            Err(ParseError::InvalidSystem(linear::Error::Empty))
        );
    }
}
