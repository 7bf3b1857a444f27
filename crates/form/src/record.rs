//! Form records
//!
//! [`CandidateRecord`] is the as-typed form state: every field may hold
//! anything. [`AcceptedRecord`] is a candidate that passed the rule set,
//! with its age parsed and its picture picked. [`ValidatedRecord`] is the
//! immutable result handed to the store, picture encoded as a data URL.

use std::fmt;
use std::path::PathBuf;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD NAMES
// ============================================================================

/// The validated fields of the registration form, in display order.
///
/// Gender is deliberately absent: it is a single-select with a default
/// and never fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Age,
    Email,
    Password,
    ConfirmPassword,
    Terms,
    Picture,
    Country,
}

impl FieldName {
    /// Every field, in display order.
    pub const ALL: [FieldName; 8] = [
        Self::Name,
        Self::Age,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Terms,
        Self::Picture,
        Self::Country,
    ];

    /// The wire name of the field (`confirmPassword`, not `confirm_password`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Terms => "terms",
            Self::Picture => "picture",
            Self::Country => "country",
        }
    }

    /// Looks a field up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// GENDER
// ============================================================================

/// Single-select gender field. Never validated; defaults when unselected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

// ============================================================================
// AGE
// ============================================================================

/// Age exactly as typed.
///
/// Kept as text so that unparsable input reaches the rule set instead of
/// being coerced to a sentinel number on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AgeInput(String);

/// Largest age that is exact when written as a fraction or an exponent
/// (`25.0`, `2.5e1`); plain digit strings are read as `u64` directly.
pub const MAX_FLOAT_YEARS: u64 = (1 << 53) - 1;

/// Outcome of parsing an [`AgeInput`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedAge {
    /// Nothing was typed.
    Empty,
    /// Something was typed but it is not a finite number.
    NotANumber,
    /// A finite number, not yet checked for sign or integrality.
    Number(f64),
}

impl AgeInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the typed text. Surrounding whitespace is ignored; `inf` and
    /// `NaN` count as not-a-number.
    pub fn parse(&self) -> ParsedAge {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            return ParsedAge::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => ParsedAge::Number(n),
            _ => ParsedAge::NotANumber,
        }
    }

    /// The age as a whole number, when it is a positive integer that can
    /// be stored exactly.
    pub fn whole_years(&self) -> Option<u64> {
        if let Ok(years) = self.0.trim().parse::<u64>() {
            return (years > 0).then_some(years);
        }
        match self.parse() {
            ParsedAge::Number(n)
                if n > 0.0 && n.fract() == 0.0 && n <= MAX_FLOAT_YEARS as f64 =>
            {
                Some(n as u64)
            }
            _ => None,
        }
    }
}

impl From<&str> for AgeInput {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for AgeInput {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<u32> for AgeInput {
    fn from(age: u32) -> Self {
        Self(age.to_string())
    }
}

// ============================================================================
// ATTACHMENT
// ============================================================================

/// Where the bytes of an attachment can be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentContent {
    /// Already in memory.
    Bytes(Bytes),
    /// A local file, read when the picture is encoded.
    Path(PathBuf),
    /// Only the descriptor is known; encoding will fail.
    Unavailable,
}

/// A selected file: its declared media type and size, plus a way to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    file_name: String,
    media_type: String,
    size: u64,
    content: AttachmentContent,
}

impl Attachment {
    /// An in-memory attachment; the size is the length of `bytes`.
    pub fn from_bytes(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        let bytes = bytes.into();
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            size: bytes.len() as u64,
            content: AttachmentContent::Bytes(bytes),
        }
    }

    /// An attachment backed by a local file with a declared size.
    pub fn from_path(
        path: impl Into<PathBuf>,
        media_type: impl Into<String>,
        size: u64,
    ) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_name,
            media_type: media_type.into(),
            size,
            content: AttachmentContent::Path(path),
        }
    }

    /// A descriptor with no readable content.
    pub fn descriptor(file_name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            size,
            content: AttachmentContent::Unavailable,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Declared size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn content(&self) -> &AttachmentContent {
        &self.content
    }
}

// ============================================================================
// CANDIDATE RECORD
// ============================================================================

/// The as-typed, not-yet-validated form state.
///
/// A snapshot: later edits to the form do not reach a record already taken.
#[derive(Clone, Default, PartialEq)]
pub struct CandidateRecord {
    pub name: String,
    pub age: AgeInput,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
    /// Selected files; only the first one is checked and encoded.
    pub picture: Vec<Attachment>,
    pub country: String,
    /// `None` when nothing is selected.
    pub gender: Option<Gender>,
}

impl CandidateRecord {
    /// The attachment that is checked and encoded.
    pub fn picture(&self) -> Option<&Attachment> {
        self.picture.first()
    }
}

impl fmt::Debug for CandidateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pictures: Vec<&str> = self.picture.iter().map(Attachment::file_name).collect();
        f.debug_struct("CandidateRecord")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("email", &self.email)
            .field("terms", &self.terms)
            .field("picture", &pictures)
            .field("country", &self.country)
            .field("gender", &self.gender)
            .finish()
    }
}

// ============================================================================
// ACCEPTED RECORD
// ============================================================================

/// A candidate that passed every rule, waiting for its picture to be encoded.
#[derive(Clone)]
pub struct AcceptedRecord {
    pub(crate) name: String,
    pub(crate) age: u64,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) country: String,
    pub(crate) gender: Option<Gender>,
    pub(crate) picture: Attachment,
}

impl AcceptedRecord {
    pub fn picture(&self) -> &Attachment {
        &self.picture
    }

    /// Attaches the encoded picture and resolves the gender.
    pub fn into_validated(self, encoded_picture: String, default_gender: Gender) -> ValidatedRecord {
        ValidatedRecord {
            name: self.name,
            age: self.age,
            email: self.email,
            password: self.password,
            gender: self.gender.unwrap_or(default_gender),
            picture: encoded_picture,
            country: self.country,
        }
    }
}

impl fmt::Debug for AcceptedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceptedRecord")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("email", &self.email)
            .field("country", &self.country)
            .field("gender", &self.gender)
            .field("picture", &self.picture.file_name)
            .finish()
    }
}

// ============================================================================
// VALIDATED RECORD
// ============================================================================

/// A record that passed every rule and had its picture encoded.
///
/// Immutable once built. The password is never serialized.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRecord {
    name: String,
    age: u64,
    email: String,
    #[serde(skip_serializing)]
    password: String,
    gender: Gender,
    picture: String,
    country: String,
}

impl ValidatedRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// The picture as a self-contained `data:` URL.
    pub fn picture(&self) -> &str {
        &self.picture
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Debug for ValidatedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedRecord")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("email", &self.email)
            .field("gender", &self.gender)
            .field("picture_len", &self.picture.len())
            .field("country", &self.country)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", ParsedAge::Empty)]
    #[case("   ", ParsedAge::Empty)]
    #[case("25", ParsedAge::Number(25.0))]
    #[case(" 7 ", ParsedAge::Number(7.0))]
    #[case("2.5", ParsedAge::Number(2.5))]
    #[case("-3", ParsedAge::Number(-3.0))]
    #[case("abc", ParsedAge::NotANumber)]
    #[case("inf", ParsedAge::NotANumber)]
    #[case("NaN", ParsedAge::NotANumber)]
    fn test_age_parse(#[case] raw: &str, #[case] expected: ParsedAge) {
        assert_eq!(AgeInput::from(raw).parse(), expected);
    }

    #[test]
    fn test_whole_years() {
        assert_eq!(AgeInput::from(25).whole_years(), Some(25));
        assert_eq!(AgeInput::from("0").whole_years(), None);
        assert_eq!(AgeInput::from("2.5").whole_years(), None);
        assert_eq!(AgeInput::from("x").whole_years(), None);
        assert_eq!(AgeInput::from("25.0").whole_years(), Some(25));
        assert_eq!(AgeInput::from("2.5e1").whole_years(), Some(25));
    }

    #[rstest]
    #[case("9007199254740993", Some(9_007_199_254_740_993))]
    #[case("18446744073709551615", Some(u64::MAX))]
    #[case("99999999999999999999", None)]
    #[case("1e20", None)]
    #[case("9007199254740993.0", None)]
    fn test_whole_years_is_exact_or_none(#[case] raw: &str, #[case] expected: Option<u64>) {
        assert_eq!(AgeInput::from(raw).whole_years(), expected);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_name(field.as_str()), Some(field));
        }
        assert_eq!(FieldName::from_name("gender"), None);
        assert_eq!(
            serde_json::to_string(&FieldName::ConfirmPassword).unwrap(),
            "\"confirmPassword\""
        );
    }

    #[test]
    fn test_attachment_from_bytes_sets_size() {
        let attachment = Attachment::from_bytes("me.png", "image/png", vec![0_u8; 10]);
        assert_eq!(attachment.size(), 10);
        assert_eq!(attachment.media_type(), "image/png");
    }

    #[test]
    fn test_attachment_from_path_takes_file_name() {
        let attachment = Attachment::from_path("/tmp/pics/me.jpg", "image/jpeg", 3);
        assert_eq!(attachment.file_name(), "me.jpg");
        assert!(matches!(attachment.content(), AttachmentContent::Path(_)));
    }

    #[test]
    fn test_validated_record_hides_password() {
        let accepted = AcceptedRecord {
            name: "Abc".into(),
            age: 25,
            email: "a@b.com".into(),
            password: "Aa1!aaaa".into(),
            country: "Canada".into(),
            gender: None,
            picture: Attachment::descriptor("me.png", "image/png", 1),
        };
        let record = accepted.into_validated("data:image/png;base64,AA==".into(), Gender::Female);

        assert_eq!(record.gender(), Gender::Female);
        assert_eq!(record.password(), "Aa1!aaaa");
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("password").is_none());
        assert!(!format!("{record:?}").contains("Aa1!aaaa"));
    }

    #[test]
    fn test_candidate_record_debug_hides_secrets() {
        let record = CandidateRecord {
            name: "Abc".into(),
            password: "Aa1!aaaa".into(),
            confirm_password: "Bb2@bbbb".into(),
            picture: vec![Attachment::descriptor("me.png", "image/png", 1)],
            ..CandidateRecord::default()
        };
        let debug = format!("{record:?}");

        assert!(debug.contains("Abc"));
        assert!(debug.contains("me.png"));
        assert!(!debug.contains("Aa1!aaaa"));
        assert!(!debug.contains("Bb2@bbbb"));
    }
}
