//! String pattern validators
//!
//! Character-class checks over a string: the first character, or the
//! presence of at least one character from a class.

use std::borrow::Cow;

use crate::foundation::ValidationError;

// ============================================================================
// STARTS WITH UPPERCASE
// ============================================================================

crate::validator! {
    /// Validates that the first character is an uppercase Latin letter (`A-Z`).
    ///
    /// The empty string fails.
    pub StartsWithUppercase for str;
    rule(input) { input.chars().next().is_some_and(|c| c.is_ascii_uppercase()) }
    error(input) {
        ValidationError::new("starts_with_uppercase", "String must start with an uppercase letter")
    }
    fn starts_with_uppercase();
}

// ============================================================================
// CONTAINS CHARACTER CLASS
// ============================================================================

/// A set of characters a string is required to contain at least one of.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII digits `0-9`.
    Digit,
    /// ASCII uppercase letters `A-Z`.
    Uppercase,
    /// ASCII lowercase letters `a-z`.
    Lowercase,
    /// Any of the listed characters.
    AnyOf(Cow<'static, str>),
}

impl CharClass {
    /// Returns true if `c` belongs to this class.
    pub fn matches(&self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Uppercase => c.is_ascii_uppercase(),
            Self::Lowercase => c.is_ascii_lowercase(),
            Self::AnyOf(set) => set.contains(c),
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        match self {
            Self::Digit => Cow::Borrowed("a digit"),
            Self::Uppercase => Cow::Borrowed("an uppercase letter"),
            Self::Lowercase => Cow::Borrowed("a lowercase letter"),
            Self::AnyOf(set) => Cow::Owned(format!("one of {set}")),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Digit => "contains_digit",
            Self::Uppercase => "contains_uppercase",
            Self::Lowercase => "contains_lowercase",
            Self::AnyOf(_) => "contains_any_of",
        }
    }
}

crate::validator! {
    /// Validates that a string contains at least one character of a class.
    #[derive(PartialEq, Eq, Hash)]
    pub ContainsChar { class: CharClass } for str;
    rule(self, input) { input.chars().any(|c| self.class.matches(c)) }
    error(self, input) {
        ValidationError::new(
            self.class.code(),
            format!("String must contain {}", self.class.describe()),
        )
    }
    fn contains_char(class: CharClass);
}

/// Requires at least one ASCII digit.
#[must_use]
pub fn contains_digit() -> ContainsChar {
    ContainsChar::new(CharClass::Digit)
}

/// Requires at least one ASCII uppercase letter.
#[must_use]
pub fn contains_uppercase() -> ContainsChar {
    ContainsChar::new(CharClass::Uppercase)
}

/// Requires at least one ASCII lowercase letter.
#[must_use]
pub fn contains_lowercase() -> ContainsChar {
    ContainsChar::new(CharClass::Lowercase)
}

/// Requires at least one of the characters in `set`.
#[must_use]
pub fn contains_any_of(set: impl Into<Cow<'static, str>>) -> ContainsChar {
    ContainsChar::new(CharClass::AnyOf(set.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("Abc", true)]
    #[case("Z", true)]
    #[case("abc", false)]
    #[case("1Abc", false)]
    #[case("Émile", false)]
    #[case("", false)]
    fn test_starts_with_uppercase(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(starts_with_uppercase().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case(contains_digit(), "abc1", true)]
    #[case(contains_digit(), "abc", false)]
    #[case(contains_uppercase(), "abC", true)]
    #[case(contains_uppercase(), "abc", false)]
    #[case(contains_lowercase(), "ABc", true)]
    #[case(contains_lowercase(), "ABC", false)]
    #[case(contains_any_of("!@#$%^&*"), "abc&", true)]
    #[case(contains_any_of("!@#$%^&*"), "abc-", false)]
    fn test_contains_char(#[case] validator: ContainsChar, #[case] input: &str, #[case] ok: bool) {
        assert_eq!(validator.validate(input).is_ok(), ok);
    }

    #[test]
    fn test_contains_char_error_code() {
        let error = contains_any_of("!@#").validate("abc").unwrap_err();
        assert_eq!(error.code, "contains_any_of");
        assert_eq!(error.message, "String must contain one of !@#");
    }
}
