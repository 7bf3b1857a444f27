//! Numeric validators

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a number is strictly greater than zero.
    ///
    /// `NaN` fails.
    pub Positive for f64;
    rule(input) { *input > 0.0 }
    error(input) {
        ValidationError::new("positive", "Value must be positive")
            .with_param("actual", input.to_string())
    }
    fn positive();
}

crate::validator! {
    /// Validates that a number has no fractional part.
    ///
    /// Infinities and `NaN` fail.
    pub Integral for f64;
    rule(input) { input.is_finite() && input.fract() == 0.0 }
    error(input) {
        ValidationError::new("integral", "Value must be an integer")
            .with_param("actual", input.to_string())
    }
    fn integral();
}

crate::validator! {
    /// Validates that a value does not exceed an inclusive upper bound.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};
    use rstest::rstest;

    #[rstest]
    #[case(1.0, true)]
    #[case(25.0, true)]
    #[case(0.5, true)]
    #[case(0.0, false)]
    #[case(-0.0, false)]
    #[case(-3.0, false)]
    #[case(f64::NAN, false)]
    fn test_positive(#[case] input: f64, #[case] ok: bool) {
        assert_eq!(positive().validate(&input).is_ok(), ok);
    }

    #[rstest]
    #[case(25.0, true)]
    #[case(-4.0, true)]
    #[case(2.5, false)]
    #[case(f64::INFINITY, false)]
    #[case(f64::NAN, false)]
    fn test_integral(#[case] input: f64, #[case] ok: bool) {
        assert_eq!(integral().validate(&input).is_ok(), ok);
    }

    #[test]
    fn test_positive_integer_chain() {
        let v = positive().and(integral());
        assert!(v.validate(&18.0).is_ok());
        assert_eq!(v.validate(&-1.5).unwrap_err().code, "positive");
        assert_eq!(v.validate(&1.5).unwrap_err().code, "integral");
    }

    #[test]
    fn test_max_inclusive() {
        let v = max(2_097_152_u64);
        assert!(v.validate(&2_097_152).is_ok());
        let error = v.validate(&2_097_153).unwrap_err();
        assert_eq!(error.param("max"), Some("2097152"));
        assert_eq!(error.param("actual"), Some("2097153"));
    }
}
