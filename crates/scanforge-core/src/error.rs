//! # Error Types
//!
//! Domain-specific error types for scanforge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  scanforge-core errors (this file)                                     │
//! │  ├── EncodeError  - Validation failures before rendering               │
//! │  └── RenderError  - The encoding backend could not build a symbol      │
//! │                                                                         │
//! │  scanforge-store errors (separate crate)                               │
//! │  └── StoreError   - History/settings persistence failures              │
//! │                                                                         │
//! │  Flow: EncodeError ──► host UI prompt (recoverable, user retypes)      │
//! │        RenderError ──► "cannot render" fallback view                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant maps to a user-facing message
//! 3. Nothing here is fatal: all failure paths return values, never panic
//! 4. `RenderError` is distinct from `EncodeError` because it occurs AFTER
//!    validation succeeded - the input was acceptable, the symbol was not
//!    constructible (e.g. too long for any QR version)

use thiserror::Error;

// =============================================================================
// Encode Error
// =============================================================================

/// Failures raised by the encode orchestrator before any rendering happens.
///
/// All variants are recoverable and reported synchronously; the host UI
/// shows them as prompts next to the input field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The requested symbology id is not registered.
    ///
    /// ## When This Occurs
    /// Only on a UI/registry mismatch - the format picker is built from the
    /// registry itself, so reaching this from the UI indicates a programmer
    /// error, not bad user input.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// The user submitted nothing (after trimming).
    #[error("Input is empty")]
    EmptyInput,

    /// Input exceeds the symbology's hard length ceiling.
    ///
    /// The generator screen clamps input via masking, but the orchestrator
    /// re-checks rather than trusting the UI.
    #[error("Input exceeds maximum length of {max} characters")]
    TooLong { max: usize },

    /// Input failed the symbology's own validation rule.
    ///
    /// The message is the registered symbology's `validation_message` and
    /// names the exact constraint violated (charset, checksum, structure).
    #[error("{message}")]
    Invalid { message: String },
}

// =============================================================================
// Render Error
// =============================================================================

/// The QR encoding backend could not construct a symbol.
///
/// ## When This Occurs
/// - Value too long for any QR version at error-correction level M
///
/// Never retried; the caller shows a generic "cannot render" state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("cannot render: {reason}")]
    CannotRender { reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with EncodeError.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Convenience type alias for Results with RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_messages() {
        assert_eq!(
            EncodeError::UnknownFormat("ean99".to_string()).to_string(),
            "Unknown format: ean99"
        );
        assert_eq!(EncodeError::EmptyInput.to_string(), "Input is empty");
        assert_eq!(
            EncodeError::TooLong { max: 80 }.to_string(),
            "Input exceeds maximum length of 80 characters"
        );
        assert_eq!(
            EncodeError::Invalid {
                message: "must be 12 or 13 digits with a valid check digit".to_string()
            }
            .to_string(),
            "must be 12 or 13 digits with a valid check digit"
        );
    }

    #[test]
    fn test_render_error_message() {
        let err = RenderError::CannotRender {
            reason: "data too long".to_string(),
        };
        assert_eq!(err.to_string(), "cannot render: data too long");
    }
}
