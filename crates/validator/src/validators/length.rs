//! String length validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Whitespace counts as content: `" "` passes.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_not_empty() {
        assert!(not_empty().validate("Canada").is_ok());
        assert!(not_empty().validate(" ").is_ok());
        assert!(not_empty().validate("").is_err());
    }
}
