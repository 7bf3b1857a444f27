//! FIELD combinator - validates specific fields of structs
//!
//! Lets a validator written for a field type (`str`, `bool`, `f64`, ...)
//! run against a whole record without derive macros.

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Validates a specific field of a struct.
///
/// # Type Parameters
///
/// * `T` - The parent struct type
/// * `U` - The field type (can be `?Sized`)
/// * `V` - The validator type
/// * `F` - The accessor function type
///
/// # Examples
///
/// ```
/// use signup_validator::prelude::*;
///
/// struct Signup {
///     country: String,
/// }
///
/// let rule = not_empty().for_field("country", |s: &Signup| s.country.as_str());
/// let error = rule.validate(&Signup { country: String::new() }).unwrap_err();
/// assert_eq!(error.field.as_deref(), Some("country"));
/// ```
pub struct Field<T, U, V, F>
where
    U: ?Sized,
{
    name: &'static str,
    validator: V,
    accessor: F,
    _phantom: PhantomData<fn(&T) -> &U>,
}

impl<T, U, V, F> Field<T, U, V, F>
where
    F: Fn(&T) -> &U,
    U: ?Sized,
{
    /// Creates a field validator tagging its errors with `name`.
    pub fn new(name: &'static str, validator: V, accessor: F) -> Self {
        Self {
            name,
            validator,
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Returns the field name.
    pub fn field_name(&self) -> &'static str {
        self.name
    }
}

// Clone impl - manual because F might not derive Clone
impl<T, U, V, F> Clone for Field<T, U, V, F>
where
    V: Clone,
    F: Clone,
    U: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            validator: self.validator.clone(),
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, U, V, F> std::fmt::Debug for Field<T, U, V, F>
where
    V: std::fmt::Debug,
    U: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("validator", &self.validator)
            .field("accessor", &"<function>")
            .finish()
    }
}

impl<T, U, V, F> Validate for Field<T, U, V, F>
where
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
    U: ?Sized,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let field_value = (self.accessor)(input);
        self.validator
            .validate(field_value)
            .map_err(|err| err.with_field(self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{is_true, not_empty};

    struct Signup {
        name: String,
        terms: bool,
    }

    fn signup(name: &str, terms: bool) -> Signup {
        Signup {
            name: name.to_string(),
            terms,
        }
    }

    #[test]
    fn test_field_tags_error() {
        let rule = not_empty().for_field("name", |s: &Signup| s.name.as_str());

        assert!(rule.validate(&signup("Ada", true)).is_ok());
        let error = rule.validate(&signup("", true)).unwrap_err();
        assert_eq!(error.field.as_deref(), Some("name"));
        assert_eq!(error.code, "not_empty");
        assert_eq!(rule.field_name(), "name");
    }

    #[test]
    fn test_field_new_tags_error() {
        let rule = Field::new("terms", is_true(), |s: &Signup| &s.terms);
        let error = rule.validate(&signup("Ada", false)).unwrap_err();
        assert_eq!(error.field.as_deref(), Some("terms"));
    }
}
