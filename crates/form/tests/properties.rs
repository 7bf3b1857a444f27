//! Property-based tests for the registration rules.

use proptest::prelude::*;
use signup_form::{
    AgeInput, Attachment, CandidateRecord, FieldName, MAX_PICTURE_BYTES, PasswordStrength,
    ValidationEngine,
};

fn valid() -> CandidateRecord {
    CandidateRecord {
        name: "Abc".into(),
        age: AgeInput::from(25),
        email: "a@b.com".into(),
        password: "Aa1!aaaa".into(),
        confirm_password: "Aa1!aaaa".into(),
        terms: true,
        picture: vec![Attachment::descriptor("me.png", "image/png", 200 * 1024)],
        country: "Canada".into(),
        gender: None,
    }
}

fn field_fails(record: &CandidateRecord, field: FieldName) -> bool {
    ValidationEngine::registration()
        .error_map(record)
        .contains(field)
}

// ============================================================================
// AGE
// ============================================================================

proptest! {
    #[test]
    fn positive_integers_accepted(age in 1_u32..=200) {
        let record = CandidateRecord { age: AgeInput::from(age), ..valid() };
        prop_assert!(!field_fails(&record, FieldName::Age));
    }

    #[test]
    fn zero_and_negatives_rejected(age in -1_000_i64..=0) {
        let record = CandidateRecord { age: AgeInput::new(age.to_string()), ..valid() };
        prop_assert!(field_fails(&record, FieldName::Age));
    }

    #[test]
    fn fractions_rejected(whole in 0_u32..150, frac in 1_u32..100) {
        let record = CandidateRecord {
            age: AgeInput::new(format!("{whole}.{frac:02}")),
            ..valid()
        };
        prop_assert!(field_fails(&record, FieldName::Age));
    }

    #[test]
    fn non_numeric_text_rejected(text in "[a-zA-Z ]{1,12}") {
        prop_assume!(text.trim().parse::<f64>().is_err());
        let record = CandidateRecord { age: AgeInput::new(text), ..valid() };
        prop_assert!(field_fails(&record, FieldName::Age));
    }
}

// ============================================================================
// PASSWORD & CONFIRMATION
// ============================================================================

fn meets_policy(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| "!@#$%^&*".contains(c))
}

proptest! {
    #[test]
    fn password_accepted_iff_all_classes_present(password in "[a-zA-Z0-9!@#$%^&*]{0,16}") {
        let record = CandidateRecord {
            password: password.clone(),
            confirm_password: password.clone(),
            ..valid()
        };
        prop_assert_eq!(!field_fails(&record, FieldName::Password), meets_policy(&password));
    }

    #[test]
    fn confirmation_accepted_iff_exactly_equal(password in "[a-zA-Z0-9!@#]{1,12}", confirm in "[a-zA-Z0-9!@# ]{1,12}") {
        let record = CandidateRecord {
            password: password.clone(),
            confirm_password: confirm.clone(),
            ..valid()
        };
        prop_assert_eq!(!field_fails(&record, FieldName::ConfirmPassword), password == confirm);
    }

    #[test]
    fn validation_is_idempotent(name in ".{0,8}", age in ".{0,4}", email in ".{0,12}") {
        let record = CandidateRecord {
            name,
            age: AgeInput::new(age),
            email,
            ..valid()
        };
        let engine = ValidationEngine::registration();
        prop_assert_eq!(engine.error_map(&record), engine.error_map(&record));
    }
}

// ============================================================================
// PICTURE
// ============================================================================

proptest! {
    #[test]
    fn picture_accepted_iff_type_and_size_fit(
        media_type in prop::sample::select(vec!["image/png", "image/jpeg", "image/gif", "text/plain"]),
        size in 0_u64..MAX_PICTURE_BYTES * 2,
    ) {
        let record = CandidateRecord {
            picture: vec![Attachment::descriptor("pic", media_type, size)],
            ..valid()
        };
        let expected = matches!(media_type, "image/png" | "image/jpeg") && size <= MAX_PICTURE_BYTES;
        prop_assert_eq!(!field_fails(&record, FieldName::Picture), expected);
    }
}

// ============================================================================
// STRENGTH
// ============================================================================

proptest! {
    #[test]
    fn strength_is_deterministic(password in ".{0,20}") {
        prop_assert_eq!(
            PasswordStrength::evaluate(Some(&password)),
            PasswordStrength::evaluate(Some(&password))
        );
    }

    #[test]
    fn strength_label_follows_score(password in ".{0,20}") {
        let score = signup_form::strength::score(&password);
        let expected = match score {
            0 => "",
            1 | 2 => "Weak",
            3 | 4 => "Medium",
            _ => "Strong",
        };
        prop_assert!(score <= 5);
        prop_assert_eq!(PasswordStrength::evaluate(Some(&password)).label(), expected);
    }
}
