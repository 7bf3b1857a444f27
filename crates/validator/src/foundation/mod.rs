//! Core validation types and traits
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//!
//! Validators are generic over their input type and compose through
//! [`ValidateExt`]:
//!
//! ```
//! use signup_validator::prelude::*;
//!
//! let age = positive().and(integral());
//! assert!(age.validate(&25.0).is_ok());
//! assert!(age.validate(&2.5).is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators, running every one of them.
///
/// Unlike [`ValidateExt::and`], this never short-circuits: the returned
/// collection holds one error per failing validator, in order.
///
/// # Examples
///
/// ```
/// use signup_validator::foundation::validate_with_all;
/// use signup_validator::validators::{contains_digit, contains_uppercase};
///
/// let errors = validate_with_all("abc", &[&contains_digit(), &contains_uppercase()]).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================
