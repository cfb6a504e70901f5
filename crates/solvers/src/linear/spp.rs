//! Gaussian elimination with scaled partial pivoting.
//!
//! Each row is scaled by its largest absolute coefficient, measured once on
//! the original matrix. At pivot column `k` the remaining row with the largest
//! `|a[row][k]| / scale[row]` becomes the pivot. Rows never move in memory;
//! the chosen order lives in a [`Permutation`] that back substitution reads.

use ndarray::{Array1, Array2};

use super::{LinearSystem, Permutation};

/// Returns the largest absolute coefficient of each row.
#[must_use]
pub fn scale_factors(coefficients: &Array2<f64>) -> Array1<f64> {
    coefficients
        .rows()
        .into_iter()
        .map(|row| row.iter().fold(0.0_f64, |smax, v| smax.max(v.abs())))
        .collect()
}

/// Reduces the system to (permuted) upper-triangular form in place.
///
/// Returns the pivot order. Only columns to the right of each pivot are
/// updated, so entries below the pivot keep stale values that back
/// substitution never reads.
pub fn forward_eliminate(system: &mut LinearSystem) -> Permutation {
    let n = system.dim();
    let scale = scale_factors(&system.coefficients);
    let mut order = Permutation::identity(n);
    let LinearSystem {
        coefficients: a,
        constants: b,
    } = system;

    for k in 0..n - 1 {
        let pivot = select_pivot(a, &scale, &order, k);
        order.swap(pivot, k);

        let pk = order[k];
        for i in (k + 1)..n {
            let pi = order[i];
            let mult = a[[pi, k]] / a[[pk, k]];
            for j in (k + 1)..n {
                let update = mult * a[[pk, j]];
                a[[pi, j]] -= update;
            }
            let update = mult * b[pk];
            b[pi] -= update;
        }
    }

    order
}

/// Returns the position (not the row index) of the next pivot.
///
/// Ties keep the earliest position. A row whose scaled ratio is `NaN` (an
/// all-zero row) is never selected, and when every ratio is zero the current
/// position `k` is kept.
fn select_pivot(a: &Array2<f64>, scale: &Array1<f64>, order: &Permutation, k: usize) -> usize {
    let mut rmax = 0.0;
    let mut pivot = k;
    for i in k..order.len() {
        let row = order[i];
        let ratio = (a[[row, k]] / scale[row]).abs();
        if ratio > rmax {
            rmax = ratio;
            pivot = i;
        }
    }
    pivot
}

/// Solves the eliminated system by walking rows in pivot order.
#[must_use]
pub fn back_substitute(system: &LinearSystem, order: &Permutation) -> Array1<f64> {
    let n = system.dim();
    let (a, b) = (&system.coefficients, &system.constants);
    let mut x = Array1::zeros(n);

    for i in (0..n).rev() {
        let row = order[i];
        let mut sum = b[row];
        for j in (i + 1)..n {
            sum -= a[[row, j]] * x[j];
        }
        x[i] = sum / a[[row, i]];
    }

    x
}
