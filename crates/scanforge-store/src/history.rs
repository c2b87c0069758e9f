//! # History Store
//!
//! The capped, deduplicated, newest-first list of scanned and generated
//! codes, persisted as one JSON array under one key.
//!
//! ## List Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  record("4006381333931", ean13)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. drop any existing entry with the same value + format               │
//! │     (duplicate-by-content: re-scanning a code moves it to the top      │
//! │      instead of littering the list)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. push the new entry to the FRONT (newest-first)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. truncate to HISTORY_CAP (oldest falls off)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. write the JSON array back under the history key                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A corrupt blob on the read path is logged and treated as an empty list;
//! the next write replaces it. History must never take the app down.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;
use uuid::Uuid;

use scanforge_core::EncodedValue;

use crate::error::StoreResult;
use crate::kv::KeyValueStore;
use crate::HISTORY_CAP;

/// Key the history array is stored under.
const HISTORY_KEY: &str = "scanforge.history";

// =============================================================================
// History Entry
// =============================================================================

/// How an entry got into the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    /// Read by the camera scanner.
    Scanned,
    /// Produced by the generator screen.
    Generated,
}

/// One remembered code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    /// Unique identifier (UUID v4).
    #[ts(as = "String")]
    pub id: Uuid,

    /// The code's content - for checksummed formats, the normalized
    /// (check-digit-completed) value.
    pub value: String,

    /// Registry id of the symbology (e.g. `"ean13"`).
    pub format_id: String,

    /// Scanned or generated.
    pub source: EntrySource,

    /// When the entry was recorded.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// History Store
// =============================================================================

/// Repository for the history list.
///
/// ## Usage
/// ```rust
/// use scanforge_store::{HistoryStore, MemoryStore};
///
/// let mut history = HistoryStore::new(MemoryStore::new());
///
/// history.record_scanned("4006381333931", "ean13").unwrap();
/// let entries = history.list().unwrap();
/// assert_eq!(entries[0].value, "4006381333931");
/// ```
#[derive(Debug)]
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Creates a history store over an injected backend.
    pub fn new(store: S) -> Self {
        HistoryStore { store }
    }

    /// Records a camera-scanned value.
    pub fn record_scanned(&mut self, value: &str, format_id: &str) -> StoreResult<HistoryEntry> {
        self.record(value, format_id, EntrySource::Scanned)
    }

    /// Records a generator result. Takes the orchestrator's output directly
    /// so the stored value is always the normalized one.
    pub fn record_generated(&mut self, encoded: &EncodedValue) -> StoreResult<HistoryEntry> {
        self.record(&encoded.value, &encoded.format_id, EntrySource::Generated)
    }

    fn record(
        &mut self,
        value: &str,
        format_id: &str,
        source: EntrySource,
    ) -> StoreResult<HistoryEntry> {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            value: value.to_string(),
            format_id: format_id.to_string(),
            source,
            created_at: Utc::now(),
        };

        debug!(format_id = %format_id, source = ?source, "Recording history entry");

        let mut entries = self.load()?;
        entries.retain(|e| !(e.value == entry.value && e.format_id == entry.format_id));
        entries.insert(0, entry.clone());
        entries.truncate(HISTORY_CAP);
        self.save(&entries)?;

        Ok(entry)
    }

    /// All entries, newest first.
    pub fn list(&self) -> StoreResult<Vec<HistoryEntry>> {
        self.load()
    }

    /// Deletes one entry by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: Uuid) -> StoreResult<()> {
        debug!(id = %id, "Removing history entry");

        let mut entries = self.load()?;
        entries.retain(|e| e.id != id);
        self.save(&entries)
    }

    /// Deletes the whole history.
    pub fn clear(&mut self) -> StoreResult<()> {
        debug!("Clearing history");
        self.store.remove(HISTORY_KEY)
    }

    /// Hands the backend back, e.g. to share it with a settings store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn load(&self) -> StoreResult<Vec<HistoryEntry>> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // Recoverable: the next write replaces the blob.
                warn!(error = %e, "History blob is corrupt, starting over");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, entries: &[HistoryEntry]) -> StoreResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(HISTORY_KEY, &raw)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
