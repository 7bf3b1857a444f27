//! In-memory record store.

use std::collections::VecDeque;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::record::ValidatedRecord;

/// How the store keeps submitted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    /// Keep only the most recent record.
    #[default]
    Replace,
    /// Keep every record, newest first.
    History,
}

/// Holds validated records for the display view.
///
/// Share it with `Arc`; every method takes `&self`.
#[derive(Debug, Default)]
pub struct RecordStore {
    mode: StoreMode,
    records: RwLock<VecDeque<ValidatedRecord>>,
}

impl RecordStore {
    pub fn new(mode: StoreMode) -> Self {
        Self {
            mode,
            records: RwLock::new(VecDeque::new()),
        }
    }

    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    /// Stores one record according to the store mode.
    pub fn submit(&self, record: ValidatedRecord) {
        let mut records = self.records.write();
        if self.mode == StoreMode::Replace {
            records.clear();
        }
        records.push_front(record);
        info!(mode = ?self.mode, held = records.len(), "record stored");
    }

    /// The most recently stored record.
    pub fn latest(&self) -> Option<ValidatedRecord> {
        self.records.read().front().cloned()
    }

    /// Every held record, newest first.
    pub fn records(&self) -> Vec<ValidatedRecord> {
        self.records.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
