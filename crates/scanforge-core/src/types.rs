//! # Domain Types
//!
//! Core domain types used throughout ScanForge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐   ┌─────────────────┐   ┌─────────────────┐  │
//! │  │ SymbologyDescriptor  │   │  EncodeRequest  │   │  EncodedValue   │  │
//! │  │  ──────────────────  │   │  ─────────────  │   │  ─────────────  │  │
//! │  │  id ("ean13")        │   │  format_id      │   │  value          │  │
//! │  │  display_name        │   │  raw_input      │   │  format_id      │  │
//! │  │  kind                │   └─────────────────┘   └─────────────────┘  │
//! │  │  encoded_format_tag  │                                              │
//! │  │  max_length          │   ┌─────────────────┐                        │
//! │  │  rule                │   │  SymbologyKind  │                        │
//! │  │  validation_message  │   │  Qr             │                        │
//! │  └──────────────────────┘   │  LinearBarcode  │                        │
//! │                             └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycles
//! Descriptors are process-wide immutable configuration. Requests and
//! results are created per generate action and discarded after use; the
//! core persists nothing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::ValidationRule;

// =============================================================================
// Symbology Kind
// =============================================================================

/// Whether a symbology renders as a 2D QR grid or a 1D linear barcode.
///
/// The host UI picks its rendering backend from this: QR values go through
/// [`crate::qr::extract_modules`], linear values go to the barcode image
/// library together with the descriptor's `encoded_format_tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SymbologyKind {
    /// Square matrix of dark/light modules.
    Qr,
    /// One-dimensional bar/space pattern.
    LinearBarcode,
}

// =============================================================================
// Symbology Descriptor
// =============================================================================

/// One supported symbology: its identity, input constraints, and the message
/// shown when input is rejected.
///
/// ## Invariants
/// - `id` is unique and lowercase across the registry
/// - `rule` is total and side-effect-free: validating the same input twice
///   yields the same answer (no hidden state)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SymbologyDescriptor {
    /// Unique lowercase identifier (e.g. `"ean13"`).
    pub id: &'static str,

    /// Human-readable label for the format picker.
    pub display_name: &'static str,

    /// QR grid or linear barcode.
    pub kind: SymbologyKind,

    /// The tag handed to the downstream linear rendering backend
    /// (e.g. `"EAN13"`). `None` for QR, which renders from the module grid.
    pub encoded_format_tag: Option<&'static str>,

    /// Hard length ceiling enforced by input masking and re-checked by the
    /// orchestrator. `None` when the symbology has no fixed ceiling.
    pub max_length: Option<usize>,

    /// The introspectable validation rule for this symbology.
    pub rule: ValidationRule,

    /// Shown to the user when `rule` rejects the input. Names the exact
    /// constraint violated.
    pub validation_message: &'static str,
}

impl SymbologyDescriptor {
    /// Runs this symbology's validation rule against (already trimmed) input.
    #[inline]
    pub fn validate(&self, input: &str) -> bool {
        self.rule.matches(input)
    }
}

// =============================================================================
// Encode Request
// =============================================================================

/// What the generator screen submits: a chosen format and the typed value.
///
/// Produced by the UI on generate, consumed once by the orchestrator,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EncodeRequest {
    /// Registry id of the chosen symbology (e.g. `"codabar"`).
    pub format_id: String,

    /// The raw user input, untrimmed.
    pub raw_input: String,
}

// =============================================================================
// Encoded Value
// =============================================================================

/// A successfully validated, normalized value ready for a rendering backend.
///
/// `value` is the exact string to hand over: check-digit-completed for
/// short-form EAN/UPC/ITF-14 input, uppercased for CODE39/Codabar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EncodedValue {
    /// The normalized payload.
    pub value: String,

    /// The symbology this value was validated against.
    pub format_id: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
