//! Form session: wires a field source to the engine, the advisory
//! helpers, and the submission pipeline.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::autocomplete::{Autocomplete, Suggestions};
use crate::config::FormConfig;
use crate::encode::{DataUrlEncoder, PictureEncoder};
use crate::engine::{ErrorMap, ValidationEngine, ValidationMode};
use crate::error::SubmitError;
use crate::record::FieldName;
use crate::source::FieldSource;
use crate::store::RecordStore;
use crate::strength::PasswordStrength;
use crate::submission::{SubmissionOutcome, SubmissionPipeline, SubmissionState};

/// One live registration form.
///
/// Every method takes `&self`, so the UI layer can hold the session behind
/// an `Arc` and call into it from its event handlers.
#[derive(Debug)]
pub struct FormSession<S> {
    source: S,
    mode: ValidationMode,
    pipeline: SubmissionPipeline,
    autocomplete: Mutex<Autocomplete>,
    strength: Mutex<PasswordStrength>,
    errors: Mutex<ErrorMap>,
}

impl<S: FieldSource> FormSession<S> {
    /// A session encoding pictures as data URLs.
    pub fn new(source: S, config: &FormConfig, store: Arc<RecordStore>) -> Self {
        Self::with_encoder(source, config, store, Arc::new(DataUrlEncoder))
    }

    pub fn with_encoder(
        source: S,
        config: &FormConfig,
        store: Arc<RecordStore>,
        encoder: Arc<dyn PictureEncoder>,
    ) -> Self {
        let pipeline = SubmissionPipeline::new(
            Arc::new(ValidationEngine::registration()),
            encoder,
            store,
        )
        .with_default_gender(config.default_gender);

        Self {
            source,
            mode: config.validation_mode,
            pipeline,
            autocomplete: Mutex::new(Autocomplete::from_catalog(config.catalog())),
            strength: Mutex::new(PasswordStrength::default()),
            errors: Mutex::new(ErrorMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Reacts to an edit of one field.
    ///
    /// Password edits rescore the strength label, country edits refilter
    /// the suggestions. In synchronous mode the error map is rebuilt from
    /// a fresh snapshot every time.
    pub fn on_field_change(&self, field: FieldName) {
        let snapshot = self.source.snapshot();
        match field {
            FieldName::Password => {
                *self.strength.lock() = PasswordStrength::evaluate(Some(&snapshot.password));
            }
            FieldName::Country => {
                self.autocomplete.lock().on_input(&snapshot.country);
            }
            _ => {}
        }

        if self.mode == ValidationMode::Synchronous {
            let errors = self.pipeline.engine().error_map(&snapshot);
            debug!(field = %field, errors = errors.len(), "field changed");
            *self.errors.lock() = errors;
        }
    }

    /// Picks a country suggestion: writes it into the field and hides the
    /// list.
    pub fn select_country(&self, value: &str) {
        let text = self.autocomplete.lock().select(value);
        self.source.write_text(FieldName::Country, &text);

        if self.mode == ValidationMode::Synchronous {
            let snapshot = self.source.snapshot();
            *self.errors.lock() = self.pipeline.engine().error_map(&snapshot);
        }
    }

    /// The error map published by the last validation pass.
    pub fn errors(&self) -> ErrorMap {
        self.errors.lock().clone()
    }

    pub fn strength(&self) -> PasswordStrength {
        *self.strength.lock()
    }

    pub fn suggestions(&self) -> Suggestions {
        self.autocomplete.lock().suggestions().clone()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.pipeline.state()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        if self.pipeline.is_busy() {
            return false;
        }
        self.mode == ValidationMode::Deferred || self.errors.lock().is_empty()
    }

    /// Submits a snapshot of the form.
    ///
    /// A rejection replaces the error map in one step; a record that passes
    /// validation clears it, whether or not encoding then succeeds.
    pub async fn submit(&self) -> Result<SubmissionOutcome, SubmitError> {
        if self.mode == ValidationMode::Synchronous {
            let count = self.errors.lock().len();
            if count > 0 {
                debug!(errors = count, "submit blocked by field errors");
                return Err(SubmitError::Blocked { count });
            }
        }

        let snapshot = self.source.snapshot();
        let result = self.pipeline.submit(snapshot).await;
        match &result {
            Ok(SubmissionOutcome::Rejected(errors)) => *self.errors.lock() = errors.clone(),
            Ok(SubmissionOutcome::Accepted { .. })
            | Err(SubmitError::Encoding(_) | SubmitError::Cancelled) => {
                *self.errors.lock() = ErrorMap::new();
            }
            Err(SubmitError::InFlight | SubmitError::Blocked { .. }) => {}
        }
        result
    }

    /// Abandons an in-flight submission, as when navigating away.
    pub fn cancel(&self) {
        self.pipeline.cancel();
    }
}
