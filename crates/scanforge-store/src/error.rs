//! # Store Error Types
//!
//! Error types for history/settings persistence.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Serialization failures convert automatically via `#[from]`
//! 3. Backend failures carry the host store's reason verbatim

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Failures while reading or writing the history/settings blobs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A blob could not be serialized or deserialized.
    ///
    /// On the read path this is usually swallowed by the callers: a corrupt
    /// history or settings blob is logged and replaced with the default, it
    /// never takes the app down.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The injected key-value backend reported a failure.
    #[error("Storage backend error: {reason}")]
    Backend { reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_converts() {
        let bad = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: StoreError = bad.into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn test_backend_error_message() {
        let err = StoreError::Backend {
            reason: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "Storage backend error: quota exceeded");
    }
}
