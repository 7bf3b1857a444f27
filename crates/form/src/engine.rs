//! Validation engine: runs the rule set and builds the error map.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};
use signup_validator::prelude::*;
use tracing::debug;

use crate::record::{AcceptedRecord, CandidateRecord, FieldName};
use crate::rules::{AGE_NOT_INTEGER, FieldRuleSet, PICTURE_REQUIRED};

/// When field rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// On every field change; submit is disabled while any error exists.
    Synchronous,
    /// Only when the form is submitted, in one pass.
    #[default]
    Deferred,
}

// ============================================================================
// ERROR MAP
// ============================================================================

/// Field name to message, one entry per failing field.
///
/// Iterates in field order. A field with no entry is valid. Serializes as
/// a JSON object keyed by the camelCase field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from collected errors; the first error per field wins.
    ///
    /// Errors not tagged with a known field are dropped.
    pub fn from_errors(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for error in errors {
            let Some(field) = error.field.as_deref().and_then(FieldName::from_name) else {
                debug!(code = %error.code, "dropping validation error without a field");
                continue;
            };
            map.entry(field).or_insert_with(|| error.message.into_owned());
        }
        Self(map)
    }

    fn single(field: FieldName, message: &str) -> Self {
        Self(BTreeMap::from([(field, message.to_string())]))
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FieldName, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a FieldName, &'a String);
    type IntoIter = btree_map::Iter<'a, FieldName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(FieldName, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (field, message) in iter {
            map.entry(field).or_insert(message);
        }
        Self(map)
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Evaluates a [`FieldRuleSet`] against candidate records.
///
/// Every rule is evaluated on every pass and the error map is rebuilt from
/// scratch, so the same record always yields the same map.
#[derive(Debug)]
pub struct ValidationEngine {
    rules: FieldRuleSet,
}

impl ValidationEngine {
    pub fn new(rules: FieldRuleSet) -> Self {
        Self { rules }
    }

    /// The engine for the registration form.
    pub fn registration() -> Self {
        Self::new(FieldRuleSet::registration())
    }

    pub fn rules(&self) -> &FieldRuleSet {
        &self.rules
    }

    /// Runs every rule, returning every failure.
    pub fn evaluate(&self, record: &CandidateRecord) -> Result<(), ValidationErrors> {
        let result = self.rules.evaluate(record);
        debug!(
            rules = self.rules.len(),
            errors = result.as_ref().err().map_or(0, ValidationErrors::len),
            "validation pass"
        );
        result
    }

    /// The error map for a record; empty when it is valid.
    pub fn error_map(&self, record: &CandidateRecord) -> ErrorMap {
        match self.evaluate(record) {
            Ok(()) => ErrorMap::new(),
            Err(errors) => ErrorMap::from_errors(errors),
        }
    }

    /// Accepts the record, or reports every failing field.
    pub fn validate(&self, record: &CandidateRecord) -> Result<AcceptedRecord, ErrorMap> {
        self.evaluate(record).map_err(ErrorMap::from_errors)?;

        // A rule set without the age or picture rules can pass a record
        // that still cannot be stored.
        let age = record
            .age
            .whole_years()
            .ok_or_else(|| ErrorMap::single(FieldName::Age, AGE_NOT_INTEGER))?;
        let picture = record
            .picture()
            .cloned()
            .ok_or_else(|| ErrorMap::single(FieldName::Picture, PICTURE_REQUIRED))?;

        Ok(AcceptedRecord {
            name: record.name.clone(),
            age,
            email: record.email.clone(),
            password: record.password.clone(),
            country: record.country.clone(),
            gender: record.gender,
            picture,
        })
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::registration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AgeInput, Attachment};
    use crate::rules::{NAME_UPPERCASE, PASSWORDS_MISMATCH, TERMS_REQUIRED};
    use pretty_assertions::assert_eq;

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

    #[test]
    fn valid_record_is_accepted() {
        let engine = ValidationEngine::registration();
        let accepted = engine.validate(&valid()).unwrap();
        assert_eq!(accepted.age, 25);
        assert_eq!(accepted.picture().file_name(), "me.png");
        assert!(engine.error_map(&valid()).is_empty());
    }

    #[test]
    fn accepted_age_is_stored_exactly() {
        let engine = ValidationEngine::registration();
        let record = CandidateRecord {
            age: AgeInput::from("9007199254740993"),
            ..valid()
        };
        assert_eq!(engine.validate(&record).unwrap().age, 9_007_199_254_740_993);

        let record = CandidateRecord {
            age: AgeInput::from("1e20"),
            ..valid()
        };
        let map = engine.validate(&record).unwrap_err();
        assert_eq!(map.get(FieldName::Age), Some(AGE_NOT_INTEGER));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn every_field_is_reported() {
        let map = ValidationEngine::registration().error_map(&CandidateRecord::default());
        assert_eq!(map.fields().collect::<Vec<_>>(), FieldName::ALL);
    }

    #[test]
    fn lowercase_name_is_the_only_error() {
        let record = CandidateRecord {
            name: "abc".into(),
            ..valid()
        };
        let map = ValidationEngine::registration().validate(&record).unwrap_err();
        let expected: ErrorMap = [(FieldName::Name, NAME_UPPERCASE.to_string())]
            .into_iter()
            .collect();
        assert_eq!(map, expected);
    }

    #[test]
    fn repeated_passes_agree() {
        let record = CandidateRecord {
            confirm_password: "nope".into(),
            terms: false,
            ..valid()
        };
        let engine = ValidationEngine::registration();
        let first = engine.error_map(&record);
        let second = engine.error_map(&record);
        assert_eq!(first, second);
        assert_eq!(first.get(FieldName::ConfirmPassword), Some(PASSWORDS_MISMATCH));
        assert_eq!(first.get(FieldName::Terms), Some(TERMS_REQUIRED));
    }

    #[test]
    fn error_map_serializes_as_object() {
        let record = CandidateRecord {
            confirm_password: "nope".into(),
            ..valid()
        };
        let map = ValidationEngine::registration().error_map(&record);
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            serde_json::json!({ "confirmPassword": PASSWORDS_MISMATCH })
        );
    }

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("a", "first").with_field("name"));
        errors.add(ValidationError::new("b", "second").with_field("name"));
        errors.add(ValidationError::new("c", "orphan"));

        let map = ErrorMap::from_errors(errors);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(FieldName::Name), Some("first"));
    }

    #[test]
    fn empty_rule_set_still_guards_the_record() {
        let engine = ValidationEngine::new(FieldRuleSet::empty());
        let record = CandidateRecord {
            age: "abc".into(),
            ..valid()
        };
        let map = engine.validate(&record).unwrap_err();
        assert!(map.contains(FieldName::Age));
    }
}
