//! # signup-form
//!
//! Validation and submission engine for a registration form.
//!
//! A [`FieldSource`] supplies [`CandidateRecord`] snapshots. The
//! [`ValidationEngine`] runs the registration [`FieldRuleSet`] over them and
//! reports failures as an [`ErrorMap`]. The [`SubmissionPipeline`] encodes the
//! picture of an accepted record and hands the [`ValidatedRecord`] to a
//! [`RecordStore`]. [`FormSession`] ties it together with the advisory
//! [`PasswordStrength`] label and the country [`Autocomplete`].
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use signup_form::{
//!     Attachment, BoundForm, FieldName, FieldValue, FormConfig, FormSession, RecordStore,
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let config = FormConfig::default();
//! let store = Arc::new(RecordStore::new(config.store_mode));
//! let session = FormSession::new(BoundForm::new(), &config, Arc::clone(&store));
//!
//! let form = session.source();
//! for (field, text) in [
//!     (FieldName::Name, "Abc"),
//!     (FieldName::Age, "25"),
//!     (FieldName::Email, "a@b.com"),
//!     (FieldName::Password, "Aa1!aaaa"),
//!     (FieldName::ConfirmPassword, "Aa1!aaaa"),
//!     (FieldName::Country, "Canada"),
//! ] {
//!     form.set_value(field, FieldValue::Text(text.into()));
//! }
//! form.set_value(FieldName::Terms, FieldValue::Flag(true));
//! form.set_value(
//!     FieldName::Picture,
//!     FieldValue::Files(vec![Attachment::from_bytes("me.png", "image/png", vec![0_u8; 8])]),
//! );
//!
//! let outcome = session.submit().await.unwrap();
//! assert!(outcome.is_accepted());
//! assert_eq!(store.latest().unwrap().name(), "Abc");
//! # });
//! ```

pub mod autocomplete;
pub mod config;
pub mod encode;
pub mod engine;
pub mod error;
pub mod picture;
pub mod record;
pub mod rules;
pub mod session;
pub mod source;
pub mod store;
pub mod strength;
pub mod submission;

pub use autocomplete::{Autocomplete, Suggestions};
pub use config::{DEFAULT_COUNTRIES, FormConfig};
pub use encode::{DataUrlEncoder, PictureEncoder, data_url};
pub use engine::{ErrorMap, ValidationEngine, ValidationMode};
pub use error::{ConfigError, EncodeError, SubmitError};
pub use picture::{ACCEPTED_MEDIA_TYPES, MAX_PICTURE_BYTES, PictureCheck, PictureConstraint};
pub use record::{
    AcceptedRecord, AgeInput, Attachment, AttachmentContent, CandidateRecord, FieldName, Gender,
    ParsedAge, ValidatedRecord,
};
pub use rules::{FieldRule, FieldRuleSet};
pub use session::FormSession;
pub use source::{
    BoundForm, CheckboxHandle, FieldSource, FieldValue, FileHandle, Handle, HandleForm,
    InputHandle, RadioGroup,
};
pub use store::{RecordStore, StoreMode};
pub use strength::PasswordStrength;
pub use submission::{Navigation, SubmissionOutcome, SubmissionPipeline, SubmissionState};
