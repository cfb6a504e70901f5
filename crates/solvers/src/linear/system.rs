use ndarray::{Array1, Array2};

use super::Error;

/// A square linear system `A·x = b`.
///
/// Construction validates the shape, so every system has `n ≥ 1`, an `n×n`
/// matrix, and `n` constants. The values themselves are not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    pub(super) coefficients: Array2<f64>,
    pub(super) constants: Array1<f64>,
}

impl LinearSystem {
    /// Creates a system from a coefficient matrix and constant vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty or not square, or if the number
    /// of constants does not match the matrix dimension.
    pub fn new(coefficients: Array2<f64>, constants: Array1<f64>) -> Result<Self, Error> {
        let (rows, cols) = coefficients.dim();
        if rows == 0 {
            return Err(Error::Empty);
        }
        if rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }
        if constants.len() != rows {
            return Err(Error::DimensionMismatch {
                expected: rows,
                got: constants.len(),
            });
        }

        Ok(Self {
            coefficients,
            constants,
        })
    }

    /// Creates a system from row vectors, as produced by a line-oriented reader.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row length differs from the row
    /// count, or the number of constants does not match.
    pub fn from_rows(rows: &[Vec<f64>], constants: Vec<f64>) -> Result<Self, Error> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::Empty);
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(Error::NotSquare {
                rows: n,
                cols: row.len(),
            });
        }

        let coefficients = Array2::from_shape_fn((n, n), |(i, j)| rows[i][j]);
        Self::new(coefficients, Array1::from(constants))
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.constants.len()
    }

    /// Returns the coefficient matrix.
    #[must_use]
    pub fn coefficients(&self) -> &Array2<f64> {
        &self.coefficients
    }

    /// Returns the constant vector.
    #[must_use]
    pub fn constants(&self) -> &Array1<f64> {
        &self.constants
    }

    /// Returns the residual `b − A·x` for a candidate solution.
    ///
    /// Only meaningful on a system that has not been eliminated.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have `dim()` entries.
    #[must_use]
    pub fn residual(&self, x: &Array1<f64>) -> Array1<f64> {
        &self.constants - &self.coefficients.dot(x)
    }
}
