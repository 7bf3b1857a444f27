//! Submission pipeline.
//!
//! `Idle -> Validating -> (Rejected | Encoding -> Accepted) -> Idle`.
//! One attempt at a time per pipeline; the picture encode is the only
//! suspension point and the only step that can be cancelled.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::encode::PictureEncoder;
use crate::engine::{ErrorMap, ValidationEngine};
use crate::error::SubmitError;
use crate::record::{CandidateRecord, Gender, ValidatedRecord};
use crate::store::RecordStore;

/// Where a submission attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Encoding,
    Accepted,
}

/// Where the UI should go after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Navigation {
    /// Show the stored records.
    RecordDisplay,
}

/// Result of a submission attempt that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Some rules failed; nothing was stored and no navigation happens.
    Rejected(ErrorMap),
    /// The record was stored.
    Accepted {
        record: ValidatedRecord,
        navigation: Navigation,
    },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The navigation signal, only present on acceptance.
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            Self::Accepted { navigation, .. } => Some(*navigation),
            Self::Rejected(_) => None,
        }
    }
}

/// Puts the pipeline back to idle when an attempt ends, however it ends.
struct IdleOnDrop<'a>(&'a Mutex<SubmissionState>);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        *self.0.lock() = SubmissionState::Idle;
    }
}

/// Validates, encodes and stores records.
pub struct SubmissionPipeline {
    engine: Arc<ValidationEngine>,
    encoder: Arc<dyn PictureEncoder>,
    store: Arc<RecordStore>,
    default_gender: Gender,
    state: Mutex<SubmissionState>,
    cancel: Mutex<CancellationToken>,
}

impl SubmissionPipeline {
    pub fn new(
        engine: Arc<ValidationEngine>,
        encoder: Arc<dyn PictureEncoder>,
        store: Arc<RecordStore>,
    ) -> Self {
        Self {
            engine,
            encoder,
            store,
            default_gender: Gender::default(),
            state: Mutex::new(SubmissionState::Idle),
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    /// Gender stored when the record has none selected.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_gender(mut self, gender: Gender) -> Self {
        self.default_gender = gender;
        self
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock()
    }

    /// Whether an attempt is validating or encoding.
    pub fn is_busy(&self) -> bool {
        self.state() != SubmissionState::Idle
    }

    pub fn engine(&self) -> &Arc<ValidationEngine> {
        &self.engine
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Abandons the in-flight attempt, if any. Nothing is stored for it.
    pub fn cancel(&self) {
        self.cancel.lock().cancel();
    }

    /// Runs one attempt on a snapshot of the form.
    ///
    /// Validation failures come back as [`SubmissionOutcome::Rejected`];
    /// errors are reserved for encoding faults, cancellation, and a second
    /// attempt while one is in flight.
    pub async fn submit(&self, record: CandidateRecord) -> Result<SubmissionOutcome, SubmitError> {
        let token = self.begin()?;
        let _idle = IdleOnDrop(&self.state);

        let accepted = match self.engine.validate(&record) {
            Ok(accepted) => accepted,
            Err(errors) => {
                self.set_state(SubmissionState::Rejected);
                debug!(errors = errors.len(), "submission rejected");
                return Ok(SubmissionOutcome::Rejected(errors));
            }
        };

        self.set_state(SubmissionState::Encoding);
        let encoded = tokio::select! {
            biased;
            () = token.cancelled() => {
                warn!("submission cancelled while encoding");
                return Err(SubmitError::Cancelled);
            }
            result = self.encoder.encode(accepted.picture()) => result.inspect_err(|e| {
                warn!(error = %e, file = accepted.picture().file_name(), "picture encoding failed");
            })?,
        };
        if token.is_cancelled() {
            warn!("submission cancelled after encoding");
            return Err(SubmitError::Cancelled);
        }

        let record = accepted.into_validated(encoded, self.default_gender);
        self.set_state(SubmissionState::Accepted);
        self.store.submit(record.clone());
        info!(name = record.name(), country = record.country(), "submission accepted");

        Ok(SubmissionOutcome::Accepted {
            record,
            navigation: Navigation::RecordDisplay,
        })
    }

    fn begin(&self) -> Result<CancellationToken, SubmitError> {
        let mut state = self.state.lock();
        if *state != SubmissionState::Idle {
            debug!(state = ?*state, "submission already in flight");
            return Err(SubmitError::InFlight);
        }
        *state = SubmissionState::Validating;

        let token = CancellationToken::new();
        *self.cancel.lock() = token.clone();
        Ok(token)
    }

    fn set_state(&self, next: SubmissionState) {
        *self.state.lock() = next;
    }
}

impl std::fmt::Debug for SubmissionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionPipeline")
            .field("state", &self.state())
            .field("default_gender", &self.default_gender)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
