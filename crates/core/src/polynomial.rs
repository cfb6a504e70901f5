/// A real polynomial stored in ascending-degree order.
///
/// Coefficient `i` multiplies `x^i`, so `[-2.0, 0.0, 1.0]` is `x² − 2`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from ascending-degree coefficients.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial from descending-degree coefficients.
    ///
    /// This is the order used by `.pol` input files, highest power first.
    #[must_use]
    pub fn from_descending(mut coefficients: Vec<f64>) -> Self {
        coefficients.reverse();
        Self { coefficients }
    }

    /// Returns the coefficients in ascending-degree order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the nominal degree (number of coefficients minus one).
    ///
    /// Returns `None` for the empty polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluates the first derivative at `x` without allocating.
    #[must_use]
    pub fn eval_derivative(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (i, &c)| acc * x + power_factor(i) * c)
    }
}

#[allow(clippy::cast_precision_loss)]
fn power_factor(i: usize) -> f64 {
    i as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_ascending_coefficients() {
        // x² − 2
        let p = Polynomial::new(vec![-2.0, 0.0, 1.0]);

        assert_relative_eq!(p.eval(0.0), -2.0);
        assert_relative_eq!(p.eval(2.0), 2.0);
        assert_relative_eq!(p.eval(-3.0), 7.0);
    }

    #[test]
    fn descending_input_is_reversed() {
        // x³ − x − 2, highest power first
        let p = Polynomial::from_descending(vec![1.0, 0.0, -1.0, -2.0]);

        assert_eq!(p.coefficients(), &[-2.0, -1.0, 0.0, 1.0]);
        assert_eq!(p.degree(), Some(3));
        assert_relative_eq!(p.eval(2.0), 4.0);
    }

    #[test]
    fn derivative_matches_power_rule() {
        // 3 + 2x − 5x² + x⁴
        let p = Polynomial::new(vec![3.0, 2.0, -5.0, 0.0, 1.0]);
        let dp = Polynomial::new(vec![2.0, -10.0, 0.0, 4.0]);

        for x in [-2.0, -0.5, 0.0, 1.25, 3.0] {
            assert_relative_eq!(p.eval_derivative(x), dp.eval(x), epsilon = 1e-12);
        }
        // p'(x) = 2 − 10x + 4x³
        assert_relative_eq!(p.eval_derivative(2.0), 14.0);
    }

    #[test]
    fn constant_and_empty_polynomials() {
        let constant = Polynomial::new(vec![4.5]);
        assert_relative_eq!(constant.eval(10.0), 4.5);
        assert_relative_eq!(constant.eval_derivative(10.0), 0.0);

        let empty = Polynomial::default();
        assert_eq!(empty.degree(), None);
        assert_relative_eq!(empty.eval(1.0), 0.0);
    }
}
