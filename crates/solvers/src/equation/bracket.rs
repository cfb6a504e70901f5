/// The strict sign of a function value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of a value, or `None` for zero and NaN.
    pub(crate) fn of(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Sign::Positive)
        } else if value < 0.0 {
            Some(Sign::Negative)
        } else {
            None
        }
    }
}

/// An ordered interval whose endpoint values have strictly opposite signs.
///
/// Signs are compared directly rather than through `f(a)·f(b) < 0`, so tiny
/// endpoint values cannot underflow the product to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from two endpoints and their function values.
    ///
    /// Endpoints are reordered so that `left < right`. Returns `None` unless
    /// the values have strictly opposite signs; a zero endpoint value does not
    /// count as a sign change.
    pub(crate) fn new(a: f64, fa: f64, b: f64, fb: f64) -> Option<Self> {
        let (sa, sb) = (Sign::of(fa)?, Sign::of(fb)?);
        if sa == sb {
            return None;
        }

        let bracket = if a < b {
            Self {
                left: a,
                right: b,
                left_sign: sa,
            }
        } else {
            Self {
                left: b,
                right: a,
                left_sign: sb,
            }
        };
        Some(bracket)
    }

    pub(crate) fn left(&self) -> f64 {
        self.left
    }

    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint, finite for any finite bracket.
    pub(crate) fn midpoint(&self) -> f64 {
        0.5 * self.left + 0.5 * self.right
    }

    /// Returns half the width, finite for any finite bracket.
    pub(crate) fn half_width(&self) -> f64 {
        0.5 * self.right - 0.5 * self.left
    }

    /// Returns true if `x` lies strictly inside the bracket.
    pub(crate) fn contains(&self, x: f64) -> bool {
        self.left < x && x < self.right
    }

    /// Moves one endpoint to `x` so the sign change is preserved.
    ///
    /// The right endpoint moves only when `fx` strictly opposes the left
    /// sign; anything else (same sign, zero, NaN) moves the left endpoint.
    pub(crate) fn shrink(&mut self, x: f64, fx: f64) {
        match Sign::of(fx) {
            Some(sign) if sign != self.left_sign => self.right = x,
            _ => self.left = x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sign_of_zero_and_nan_is_none() {
        assert_eq!(Sign::of(2.0), Some(Sign::Positive));
        assert_eq!(Sign::of(-1e-300), Some(Sign::Negative));
        assert_eq!(Sign::of(0.0), None);
        assert_eq!(Sign::of(-0.0), None);
        assert_eq!(Sign::of(f64::NAN), None);
    }

    #[test]
    fn new_reorders_endpoints_with_signs() {
        let bracket = Bracket::new(3.0, 1.0, 1.0, -1.0).expect("valid bracket");

        assert_eq!(bracket.as_array(), [1.0, 3.0]);
        assert_eq!(bracket.left_sign, Sign::Negative);
        assert_relative_eq!(bracket.half_width(), 1.0);
        assert_relative_eq!(bracket.midpoint(), 2.0);
    }

    #[test]
    fn midpoint_and_half_width_stay_finite_near_max() {
        let bracket = Bracket::new(-1.7e308, -1.0, 1.7e308, 1.0).expect("valid bracket");
        assert_relative_eq!(bracket.half_width(), 1.7e308);
        assert_relative_eq!(bracket.midpoint(), 0.0);

        let bracket = Bracket::new(1.0e308, -1.0, 1.7e308, 1.0).expect("valid bracket");
        assert_relative_eq!(bracket.midpoint(), 1.35e308, max_relative = 1e-15);
        assert!(bracket.contains(bracket.midpoint()));
    }

    #[test]
    fn new_rejects_missing_sign_change() {
        assert!(Bracket::new(0.0, 1.0, 2.0, 5.0).is_none());
        assert!(Bracket::new(0.0, 0.0, 2.0, 5.0).is_none());
        assert!(Bracket::new(0.0, f64::NAN, 2.0, -5.0).is_none());
        assert!(Bracket::new(1.0, -1.0, 1.0, -1.0).is_none());
    }

    #[test]
    fn tiny_values_still_bracket() {
        // The product underflows to -0.0, the signs do not.
        assert!(Bracket::new(0.0, 1e-200, 1.0, -1e-200).is_some());
    }

    #[test]
    fn shrink_moves_matching_side() {
        let mut bracket = Bracket::new(0.0, -2.0, 2.0, 2.0).expect("valid bracket");

        bracket.shrink(1.0, -1.0);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        bracket.shrink(1.5, 0.25);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);

        bracket.shrink(1.25, f64::NAN);
        assert_eq!(bracket.as_array(), [1.25, 1.5]);
    }

    #[test]
    fn contains_is_strict() {
        let bracket = Bracket::new(0.0, -1.0, 1.0, 1.0).expect("valid bracket");

        assert!(bracket.contains(0.5));
        assert!(!bracket.contains(0.0));
        assert!(!bracket.contains(1.0));
        assert!(!bracket.contains(f64::NAN));
    }
}
