//! Field collection.
//!
//! Whatever holds the live form values, the engine only ever sees a
//! [`CandidateRecord`] snapshot taken through [`FieldSource`]. Two adapters
//! are provided: [`HandleForm`] reads shared handles owned by the UI layer,
//! [`BoundForm`] holds values pushed into it by bindings.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::record::{AgeInput, Attachment, CandidateRecord, FieldName, Gender};

/// Reads the current form values.
pub trait FieldSource: Send + Sync {
    /// Copies every field into a fresh record. Later edits do not reach it.
    fn snapshot(&self) -> CandidateRecord;

    /// Replaces the text of a text field. Non-text fields are left alone.
    fn write_text(&self, field: FieldName, text: &str);
}

// ============================================================================
// HANDLES
// ============================================================================

/// A value shared between the UI layer and the form.
///
/// Cloning yields another handle to the same value.
#[derive(Debug, Default)]
pub struct Handle<T>(Arc<RwLock<T>>);

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: Clone> Handle<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    pub fn get(&self) -> T {
        self.0.read().clone()
    }

    pub fn set(&self, value: T) {
        *self.0.write() = value;
    }
}

/// Text input.
pub type InputHandle = Handle<String>;
/// Checkbox.
pub type CheckboxHandle = Handle<bool>;
/// File picker holding the selected files.
pub type FileHandle = Handle<Vec<Attachment>>;
/// Radio group; `None` while nothing is checked.
pub type RadioGroup = Handle<Option<Gender>>;

/// A form read through direct handles.
///
/// Handles that were never attached read as empty, unchecked, or unset.
#[derive(Clone, Default)]
pub struct HandleForm {
    inputs: BTreeMap<FieldName, InputHandle>,
    terms: Option<CheckboxHandle>,
    picture: Option<FileHandle>,
    gender: Option<RadioGroup>,
}

impl HandleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a text input to one of the text fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_input(mut self, field: FieldName, handle: InputHandle) -> Self {
        self.inputs.insert(field, handle);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_terms(mut self, handle: CheckboxHandle) -> Self {
        self.terms = Some(handle);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_picture(mut self, handle: FileHandle) -> Self {
        self.picture = Some(handle);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_gender(mut self, handle: RadioGroup) -> Self {
        self.gender = Some(handle);
        self
    }

    fn text(&self, field: FieldName) -> String {
        self.inputs.get(&field).map(Handle::get).unwrap_or_default()
    }
}

impl fmt::Debug for HandleForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleForm")
            .field("inputs", &self.inputs.keys().collect::<Vec<_>>())
            .field("terms", &self.terms.is_some())
            .field("picture", &self.picture.is_some())
            .field("gender", &self.gender.is_some())
            .finish()
    }
}

impl FieldSource for HandleForm {
    fn snapshot(&self) -> CandidateRecord {
        CandidateRecord {
            name: self.text(FieldName::Name),
            age: AgeInput::new(self.text(FieldName::Age)),
            email: self.text(FieldName::Email),
            password: self.text(FieldName::Password),
            confirm_password: self.text(FieldName::ConfirmPassword),
            terms: self.terms.as_ref().is_some_and(Handle::get),
            picture: self.picture.as_ref().map(Handle::get).unwrap_or_default(),
            country: self.text(FieldName::Country),
            gender: self.gender.as_ref().and_then(Handle::get),
        }
    }

    fn write_text(&self, field: FieldName, text: &str) {
        if let Some(input) = self.inputs.get(&field) {
            input.set(text.to_string());
        }
    }
}

// ============================================================================
// BINDINGS
// ============================================================================

/// A value pushed by a binding.
///
/// `Debug` prints only the length of text values, which may be passwords.
#[derive(Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Files(Vec<Attachment>),
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f
                .debug_struct("Text")
                .field("chars", &text.chars().count())
                .finish_non_exhaustive(),
            Self::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Self::Files(files) => f.debug_tuple("Files").field(files).finish(),
        }
    }
}

/// A form whose values are pushed in by declarative bindings.
///
/// Every field can be watched. A value of the wrong kind for its field
/// (say, text for `terms`) reads as unset.
#[derive(Debug)]
pub struct BoundForm {
    fields: [watch::Sender<Option<FieldValue>>; FieldName::ALL.len()],
    gender: watch::Sender<Option<Gender>>,
}

impl BoundForm {
    pub fn new() -> Self {
        Self {
            fields: std::array::from_fn(|_| watch::Sender::new(None)),
            gender: watch::Sender::new(None),
        }
    }

    fn slot(&self, field: FieldName) -> &watch::Sender<Option<FieldValue>> {
        &self.fields[field as usize]
    }

    /// Pushes a new value; watchers are notified.
    pub fn set_value(&self, field: FieldName, value: FieldValue) {
        self.slot(field).send_replace(Some(value));
    }

    /// Clears a field back to unset.
    pub fn clear(&self, field: FieldName) {
        self.slot(field).send_replace(None);
    }

    pub fn set_gender(&self, gender: Option<Gender>) {
        self.gender.send_replace(gender);
    }

    /// Current value of a field, if one was pushed.
    pub fn value(&self, field: FieldName) -> Option<FieldValue> {
        self.slot(field).borrow().clone()
    }

    /// Subscribes to changes of one field.
    pub fn watch(&self, field: FieldName) -> watch::Receiver<Option<FieldValue>> {
        self.slot(field).subscribe()
    }

    fn text(&self, field: FieldName) -> String {
        match &*self.slot(field).borrow() {
            Some(FieldValue::Text(text)) => text.clone(),
            _ => String::new(),
        }
    }

    fn flag(&self, field: FieldName) -> bool {
        matches!(&*self.slot(field).borrow(), Some(FieldValue::Flag(true)))
    }

    fn files(&self, field: FieldName) -> Vec<Attachment> {
        match &*self.slot(field).borrow() {
            Some(FieldValue::Files(files)) => files.clone(),
            _ => Vec::new(),
        }
    }
}

impl Default for BoundForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSource for BoundForm {
    fn snapshot(&self) -> CandidateRecord {
        CandidateRecord {
            name: self.text(FieldName::Name),
            age: AgeInput::new(self.text(FieldName::Age)),
            email: self.text(FieldName::Email),
            password: self.text(FieldName::Password),
            confirm_password: self.text(FieldName::ConfirmPassword),
            terms: self.flag(FieldName::Terms),
            picture: self.files(FieldName::Picture),
            country: self.text(FieldName::Country),
            gender: *self.gender.borrow(),
        }
    }

    fn write_text(&self, field: FieldName, text: &str) {
        self.set_value(field, FieldValue::Text(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn handle_form_reads_at_snapshot_time() {
        let name = InputHandle::new("Ada".into());
        let terms = CheckboxHandle::default();
        let form = HandleForm::new()
            .with_input(FieldName::Name, name.clone())
            .with_terms(terms.clone());

        let before = form.snapshot();
        name.set("Grace".into());
        terms.set(true);
        let after = form.snapshot();

        assert_eq!(before.name, "Ada");
        assert!(!before.terms);
        assert_eq!(after.name, "Grace");
        assert!(after.terms);
    }

    #[test]
    fn unattached_handles_read_empty() {
        let record = HandleForm::new().snapshot();
        assert_eq!(record, CandidateRecord::default());
    }

    #[test]
    fn handle_form_write_text() {
        let country = InputHandle::default();
        let form = HandleForm::new().with_input(FieldName::Country, country.clone());
        form.write_text(FieldName::Country, "Canada");
        form.write_text(FieldName::Email, "ignored@x.com");

        assert_eq!(country.get(), "Canada");
        assert_eq!(form.snapshot().email, "");
    }

    #[test]
    fn bound_form_snapshot() {
        let form = BoundForm::new();
        form.set_value(FieldName::Age, FieldValue::Text("25".into()));
        form.set_value(FieldName::Terms, FieldValue::Flag(true));
        form.set_value(
            FieldName::Picture,
            FieldValue::Files(vec![Attachment::descriptor("me.png", "image/png", 1)]),
        );
        form.set_gender(Some(Gender::Female));

        let record = form.snapshot();
        assert_eq!(record.age.whole_years(), Some(25));
        assert!(record.terms);
        assert_eq!(record.picture.len(), 1);
        assert_eq!(record.gender, Some(Gender::Female));
    }

    #[test]
    fn debug_output_hides_typed_text() {
        let password = InputHandle::new("Aa1!aaaa".into());
        let handles = HandleForm::new().with_input(FieldName::Password, password);
        let bound = BoundForm::new();
        bound.set_value(FieldName::Password, FieldValue::Text("Aa1!aaaa".into()));

        assert!(!format!("{handles:?}").contains("Aa1!aaaa"));
        assert!(!format!("{bound:?}").contains("Aa1!aaaa"));
        assert_eq!(
            format!("{:?}", FieldValue::Text("Aa1!aaaa".into())),
            "Text { chars: 8, .. }"
        );
    }

    #[test]
    fn bound_form_wrong_kind_reads_unset() {
        let form = BoundForm::new();
        form.set_value(FieldName::Terms, FieldValue::Text("yes".into()));
        form.set_value(FieldName::Name, FieldValue::Flag(true));

        let record = form.snapshot();
        assert!(!record.terms);
        assert_eq!(record.name, "");
    }

    #[test]
    fn bound_form_watch_sees_updates() {
        let form = BoundForm::new();
        let mut rx = form.watch(FieldName::Email);
        assert!(!rx.has_changed().unwrap());

        form.write_text(FieldName::Email, "a@b.com");
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            *rx.borrow_and_update(),
            Some(FieldValue::Text("a@b.com".into()))
        );

        form.clear(FieldName::Email);
        assert_eq!(form.value(FieldName::Email), None);
    }
}
