//! AND combinators - logical conjunction of validators
//!
//! [`And`] short-circuits on the first failure. [`AllOf`] runs every
//! validator and folds all failures into a single error, which is what a
//! compound rule needs when each unmet sub-condition must be reported.

use crate::foundation::{Validate, ValidationError, validate_with_all};

/// Combines two validators with logical AND.
///
/// Both validators must pass. The error of the first failing validator is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use signup_validator::combinators::And;
/// use signup_validator::foundation::Validate;
/// use signup_validator::validators::{not_empty, starts_with_uppercase};
///
/// let validator = And::new(not_empty(), starts_with_uppercase());
/// assert!(validator.validate("Ada").is_ok());
/// assert_eq!(validator.validate("").unwrap_err().code, "not_empty");
/// assert_eq!(validator.validate("ada").unwrap_err().code, "starts_with_uppercase");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

// ============================================================================
// ALL OF
// ============================================================================

/// Runs every validator and reports all failures at once.
///
/// The combined error has code `all_of`, a message made of the failing
/// messages joined by a single space, and the individual failures as
/// nested errors.
///
/// # Examples
///
/// ```
/// use signup_validator::combinators::all_of;
/// use signup_validator::foundation::Validate;
/// use signup_validator::validators::{contains_digit, contains_uppercase};
///
/// let validator = all_of(vec![contains_digit(), contains_uppercase()]);
/// let error = validator.validate("abc").unwrap_err();
/// assert_eq!(error.nested.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AllOf<V> {
    validators: Vec<V>,
}

impl<V> AllOf<V> {
    /// Returns the wrapped validators.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for AllOf<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let refs: Vec<&V> = self.validators.iter().collect();
        validate_with_all(input, &refs).map_err(|errors| {
            let message = errors
                .errors()
                .iter()
                .map(|e| &*e.message)
                .collect::<Vec<_>>()
                .join(" ");
            ValidationError::new("all_of", message).with_nested(errors.into_iter().collect())
        })
    }
}

/// Creates an [`AllOf`] combinator.
#[must_use]
pub fn all_of<V>(validators: Vec<V>) -> AllOf<V>
where
    V: Validate,
{
    AllOf { validators }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{
        contains_digit, contains_lowercase, contains_uppercase, not_empty, starts_with_uppercase,
    };

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(not_empty(), starts_with_uppercase());
        assert!(validator.validate("Hello").is_ok());
    }

    #[test]
    fn test_and_left_error_wins() {
        let validator = not_empty().and(starts_with_uppercase());
        assert_eq!(validator.validate("").unwrap_err().code, "not_empty");
    }

    #[test]
    fn test_all_of_passes_when_all_pass() {
        let validator = all_of(vec![contains_digit(), contains_uppercase(), contains_lowercase()]);
        assert!(validator.validate("Abc1").is_ok());
    }

    #[test]
    fn test_all_of_collects_every_failure() {
        let validator = all_of(vec![
            contains_digit().with_message("needs a digit."),
            contains_uppercase().with_message("needs an uppercase letter."),
            contains_lowercase().with_message("needs a lowercase letter."),
        ]);

        let error = validator.validate("abc").unwrap_err();
        assert_eq!(error.code, "all_of");
        assert_eq!(error.message, "needs a digit. needs an uppercase letter.");
        assert_eq!(error.nested.len(), 2);
    }
}
