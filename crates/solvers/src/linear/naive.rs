//! Naive Gaussian elimination.
//!
//! Rows are eliminated in their natural order and the diagonal entry is always
//! the pivot. A zero pivot divides by zero and a tiny one amplifies rounding
//! error; both are left to the arithmetic.

use ndarray::Array1;

use super::LinearSystem;

/// Reduces the system to upper-triangular form in place.
///
/// For each pivot column `k`, subtracts `a[i][k]/a[k][k]` times row `k` from
/// every row below it, along with the matching constant.
pub fn forward_eliminate(system: &mut LinearSystem) {
    let n = system.dim();
    let LinearSystem {
        coefficients: a,
        constants: b,
    } = system;

    for k in 0..n - 1 {
        for i in (k + 1)..n {
            let mult = a[[i, k]] / a[[k, k]];
            for j in k..n {
                let update = mult * a[[k, j]];
                a[[i, j]] -= update;
            }
            let update = mult * b[k];
            b[i] -= update;
        }
    }
}

/// Solves an upper-triangular system from the last unknown upward.
///
/// Entries below the diagonal are ignored.
#[must_use]
pub fn back_substitute(system: &LinearSystem) -> Array1<f64> {
    let n = system.dim();
    let (a, b) = (&system.coefficients, &system.constants);
    let mut x = Array1::zeros(n);

    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[[i, j]] * x[j];
        }
        x[i] = sum / a[[i, i]];
    }

    x
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn elimination_zeroes_the_lower_triangle() {
        let mut system = LinearSystem::new(
            array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]],
            array![8.0, -11.0, -3.0],
        )
        .expect("square system");

        forward_eliminate(&mut system);

        let a = system.coefficients();
        for i in 0..3 {
            for j in 0..i {
                assert_relative_eq!(a[[i, j]], 0.0);
            }
        }
        assert_relative_eq!(a[[1, 1]], 0.5);
        assert_relative_eq!(a[[2, 2]], -1.0);
        assert_relative_eq!(system.constants()[2], 1.0);
    }

    #[test]
    fn back_substitution_on_triangular_input() {
        let system = LinearSystem::new(
            array![[2.0, 1.0, -1.0], [0.0, 0.5, 0.5], [0.0, 0.0, -1.0]],
            array![8.0, 1.0, 1.0],
        )
        .expect("square system");

        let x = back_substitute(&system);

        assert_relative_eq!(x[0], 2.0);
        assert_relative_eq!(x[1], 3.0);
        assert_relative_eq!(x[2], -1.0);
    }
}
