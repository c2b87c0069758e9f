//! # scanforge-store: History & Settings Persistence for ScanForge
//!
//! This crate provides the persistence logic for scan/generate history and
//! app settings. The physical store is NOT here: the host app injects
//! anything implementing [`kv::KeyValueStore`] (platform key-value storage),
//! and this crate decides what the blobs look like and how lists behave.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ScanForge Data Flow                                │
//! │                                                                         │
//! │  Scanner screen / Generator screen                                     │
//! │       │ scanned or encoded value                                        │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   scanforge-store (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ KeyValueStore │    │ HistoryStore  │    │SettingsStore │  │   │
//! │  │   │   (kv.rs)     │◄───│ (history.rs)  │    │(settings.rs) │  │   │
//! │  │   │    trait      │    │ cap + dedup   │    │ defaults +   │  │   │
//! │  │   │               │◄───│ newest-first  │    │ recovery     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Host key-value storage (platform API, injected)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The storage seam: `KeyValueStore` trait + in-memory test store
//! - [`history`] - Capped, deduplicated, newest-first history list
//! - [`settings`] - Settings blob with defaults and corrupt-blob recovery
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod history;
pub mod kv;
pub mod settings;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use history::{EntrySource, HistoryEntry, HistoryStore};
pub use kv::{KeyValueStore, MemoryStore};
pub use settings::{Settings, SettingsStore, Theme};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum history entries kept.
///
/// ## Business Reason
/// History renders as one scrollable list; past 100 entries nobody scrolls
/// and the JSON blob just grows. Oldest entries fall off on insert.
pub const HISTORY_CAP: usize = 100;
