//! MESSAGE combinator - custom error messages

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// Used to attach the user-facing text of a rule to a generic validator.
/// The original error is kept as a nested error.
///
/// # Examples
///
/// ```
/// use signup_validator::combinators::WithMessage;
/// use signup_validator::foundation::Validate;
/// use signup_validator::validators::is_true;
///
/// let validator = WithMessage::new(is_true(), "You must accept the Terms and Conditions");
/// let error = validator.validate(&false).unwrap_err();
/// assert_eq!(error.message, "You must accept the Terms and Conditions");
/// assert_eq!(error.code, "is_true");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let mut error = ValidationError::new(original.code.clone(), self.message.clone());
            error.field.clone_from(&original.field);
            error.with_nested(vec![original])
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
