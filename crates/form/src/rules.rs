//! The registration field rule set.
//!
//! One rule per field. Inside a rule, checks run in order and the first
//! failure wins; across rules nothing short-circuits.

use std::fmt;

use signup_validator::foundation::validate_with_all;
use signup_validator::prelude::*;

use crate::picture::picture_constraint;
use crate::record::{AgeInput, CandidateRecord, FieldName, ParsedAge};

pub use crate::picture::{PICTURE_REQUIRED, PICTURE_TOO_LARGE, PICTURE_WRONG_TYPE};

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_UPPERCASE: &str = "Name must start with an uppercase letter.";
pub const AGE_REQUIRED: &str = "Age is required";
pub const AGE_NOT_A_NUMBER: &str = "Age must be a number";
pub const AGE_NOT_POSITIVE: &str = "Age must be a positive number";
pub const AGE_NOT_INTEGER: &str = "Age must be an integer";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_FORMAT: &str = "Invalid email format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_DIGIT: &str = "Password must contain at least 1 number.";
pub const PASSWORD_UPPERCASE: &str = "Password must contain at least 1 uppercase letter.";
pub const PASSWORD_LOWERCASE: &str = "Password must contain at least 1 lowercase letter.";
pub const PASSWORD_SPECIAL: &str = "Password must contain at least 1 special character: !@#$%^&*.";
pub const CONFIRM_REQUIRED: &str = "Confirm Password is required";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must accept the Terms and Conditions";
pub const COUNTRY_REQUIRED: &str = "Country is required";

/// Characters that satisfy the password's special-character condition.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

type RecordCheck = Box<dyn Validate<Input = CandidateRecord> + Send + Sync>;

// ============================================================================
// AGE
// ============================================================================

/// Required, numeric, strictly positive, integral.
///
/// Unparsable text is always a failure; it is never coerced to a number.
/// An integer too large to store exactly fails as not an integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeRule;

impl Validate for AgeRule {
    type Input = AgeInput;

    fn validate(&self, age: &AgeInput) -> Result<(), ValidationError> {
        match age.parse() {
            ParsedAge::Empty => Err(ValidationError::new("required", AGE_REQUIRED)),
            ParsedAge::NotANumber => Err(ValidationError::new("type_mismatch", AGE_NOT_A_NUMBER)
                .with_param("expected", "number")),
            ParsedAge::Number(years) => {
                positive()
                    .with_message(AGE_NOT_POSITIVE)
                    .and(integral().with_message(AGE_NOT_INTEGER))
                    .validate(&years)?;
                match age.whole_years() {
                    Some(_) => Ok(()),
                    None => Err(ValidationError::new("integer_range", AGE_NOT_INTEGER)
                        .with_param("actual", age.as_str().trim().to_string())),
                }
            }
        }
    }
}

// ============================================================================
// CONFIRMATION
// ============================================================================

/// Cross-field rule: the confirmation must equal the password exactly.
///
/// Reads the whole record so both sides come from the same snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmationRule;

impl Validate for ConfirmationRule {
    type Input = CandidateRecord;

    fn validate(&self, record: &CandidateRecord) -> Result<(), ValidationError> {
        let field = FieldName::ConfirmPassword.as_str();
        not_empty()
            .with_message(CONFIRM_REQUIRED)
            .validate(&record.confirm_password)
            .map_err(|e| e.with_field(field))?;

        if record.confirm_password == record.password {
            Ok(())
        } else {
            Err(ValidationError::new("matches", PASSWORDS_MISMATCH)
                .with_field(field)
                .with_param("other", FieldName::Password.as_str()))
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// One entry of the rule set: the field it reports on and its check.
pub struct FieldRule {
    field: FieldName,
    check: RecordCheck,
}

impl FieldRule {
    pub fn new<V>(field: FieldName, check: V) -> Self
    where
        V: Validate<Input = CandidateRecord> + Send + Sync + 'static,
    {
        Self {
            field,
            check: Box::new(check),
        }
    }

    pub fn field(&self) -> FieldName {
        self.field
    }
}

impl Validate for FieldRule {
    type Input = CandidateRecord;

    fn validate(&self, record: &CandidateRecord) -> Result<(), ValidationError> {
        self.check
            .validate(record)
            .map_err(|e| e.with_field(self.field.as_str()))
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("check", &"<validator>")
            .finish()
    }
}

/// The ordered table of field rules.
#[derive(Debug)]
pub struct FieldRuleSet {
    rules: Vec<FieldRule>,
}

impl FieldRuleSet {
    /// An empty rule set; everything passes.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The registration form's rules, one per [`FieldName`] in order.
    pub fn registration() -> Self {
        let password_conditions = all_of(vec![
            contains_digit().with_message(PASSWORD_DIGIT),
            contains_uppercase().with_message(PASSWORD_UPPERCASE),
            contains_lowercase().with_message(PASSWORD_LOWERCASE),
            contains_any_of(PASSWORD_SPECIALS).with_message(PASSWORD_SPECIAL),
        ]);

        Self::empty()
            .with_rule(
                FieldName::Name,
                not_empty()
                    .with_message(NAME_REQUIRED)
                    .and(starts_with_uppercase().with_message(NAME_UPPERCASE))
                    .for_field(FieldName::Name.as_str(), |r: &CandidateRecord| r.name.as_str()),
            )
            .with_rule(
                FieldName::Age,
                AgeRule.for_field(FieldName::Age.as_str(), |r: &CandidateRecord| &r.age),
            )
            .with_rule(
                FieldName::Email,
                not_empty()
                    .with_message(EMAIL_REQUIRED)
                    .and(simple_email().with_message(EMAIL_FORMAT))
                    .for_field(FieldName::Email.as_str(), |r: &CandidateRecord| r.email.as_str()),
            )
            .with_rule(
                FieldName::Password,
                not_empty()
                    .with_message(PASSWORD_REQUIRED)
                    .and(password_conditions)
                    .for_field(FieldName::Password.as_str(), |r: &CandidateRecord| {
                        r.password.as_str()
                    }),
            )
            .with_rule(FieldName::ConfirmPassword, ConfirmationRule)
            .with_rule(
                FieldName::Terms,
                is_true()
                    .with_message(TERMS_REQUIRED)
                    .for_field(FieldName::Terms.as_str(), |r: &CandidateRecord| &r.terms),
            )
            .with_rule(
                FieldName::Picture,
                picture_constraint().for_field(FieldName::Picture.as_str(), |r: &CandidateRecord| {
                    r.picture.as_slice()
                }),
            )
            .with_rule(
                FieldName::Country,
                not_empty()
                    .with_message(COUNTRY_REQUIRED)
                    .for_field(FieldName::Country.as_str(), |r: &CandidateRecord| {
                        r.country.as_str()
                    }),
            )
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule<V>(mut self, field: FieldName, check: V) -> Self
    where
        V: Validate<Input = CandidateRecord> + Send + Sync + 'static,
    {
        self.rules.push(FieldRule::new(field, check));
        self
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule against the record and collects every failure.
    ///
    /// Each error is tagged with the field of the rule that produced it,
    /// whatever the check itself reported.
    pub fn evaluate(&self, record: &CandidateRecord) -> Result<(), ValidationErrors> {
        let refs: Vec<&FieldRule> = self.rules.iter().collect();
        validate_with_all(record, &refs)
    }
}

impl Default for FieldRuleSet {
    fn default() -> Self {
        Self::registration()
    }
}
