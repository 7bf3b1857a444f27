//! Membership validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is exactly one of a fixed set of values.
    ///
    /// Comparison is exact and case-sensitive.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub OneOf { allowed: &'static [&'static str] } for str;
    rule(self, input) { self.allowed.iter().any(|allowed| *allowed == input) }
    error(self, input) {
        ValidationError::new("one_of", format!("Value must be one of: {}", self.allowed.join(", ")))
            .with_param("actual", input.to_string())
    }
    fn one_of(allowed: &'static [&'static str]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    const IMAGES: &[&str] = &["image/jpeg", "image/png"];

    #[test]
    fn test_one_of_exact_match() {
        assert!(one_of(IMAGES).validate("image/png").is_ok());
        assert!(one_of(IMAGES).validate("image/jpeg").is_ok());
        assert!(one_of(IMAGES).validate("image/PNG").is_err());
        assert!(one_of(IMAGES).validate("image/gif").is_err());
    }

    #[test]
    fn test_one_of_error_lists_allowed() {
        let error = one_of(IMAGES).validate("text/plain").unwrap_err();
        assert_eq!(error.message, "Value must be one of: image/jpeg, image/png");
        assert_eq!(error.param("actual"), Some("text/plain"));
    }
}
