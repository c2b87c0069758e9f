//! # Key-Value Seam
//!
//! The boundary between this crate's persistence logic and the host
//! platform's actual storage.
//!
//! ## Why a Trait?
//! The mobile host backs this with whatever the platform offers; tests and
//! previews back it with [`MemoryStore`]. Everything above the trait -
//! history capping, dedup, settings recovery - is identical either way and
//! fully testable without a device.

use std::collections::HashMap;

use crate::error::StoreResult;

// =============================================================================
// KeyValueStore Trait
// =============================================================================

/// A string-keyed, string-valued store. Values are opaque JSON blobs as far
/// as the backend is concerned.
pub trait KeyValueStore {
    /// Reads the value under `key`, `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// A `HashMap`-backed store for tests and previews. Never touches disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of keys currently held. Test helper.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();

        assert!(store.is_empty());
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1); // overwrite, not a second key

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_removing_absent_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("never-set").is_ok());
    }
}
