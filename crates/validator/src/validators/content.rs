//! String content validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// `local@domain.tld`: no whitespace, exactly one `@`, at least one dot after it.
static SIMPLE_EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

crate::validator! {
    /// Validates the `local@domain.tld` shape of an email address.
    ///
    /// Deliberately loose: no RFC 5322 parsing, just a non-whitespace local
    /// part, an `@`, and a dotted domain.
    pub SimpleEmail for str;
    rule(input) { SIMPLE_EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("", "email") }
    fn simple_email();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com", true)]
    #[case("first.last@mail.example.org", true)]
    #[case("a@b.c.d", true)]
    #[case("a@b", false)]
    #[case("@b.com", false)]
    #[case("a b@c.com", false)]
    #[case("a@@b.com", false)]
    #[case("a@b.", false)]
    #[case("", false)]
    fn test_simple_email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(simple_email().validate(input).is_ok(), ok);
    }

    #[test]
    fn test_simple_email_error() {
        let error = simple_email().validate("nope").unwrap_err();
        assert_eq!(error.code, "invalid_format");
        assert_eq!(error.param("expected"), Some("email"));
    }
}
