//! # scanforge-core: Pure Symbology Logic for ScanForge
//!
//! This crate is the **heart** of ScanForge. It contains the symbology codec
//! and validator as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ScanForge Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Host App (mobile UI)                        │   │
//! │  │   Scanner screen ──► Generator screen ──► History ──► Settings │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ format id + raw input                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ scanforge-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ registry  │  │ checksum  │  │    qr     │  │  encode   │  │   │
//! │  │   │ formats   │  │  mod-10   │  │ modules   │  │ validate  │  │   │
//! │  │   │ lookup    │  │  digits   │  │  sizing   │  │ normalize │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CAMERA • NO STORAGE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ normalized value                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          Rendering backends (host side)                         │   │
//! │  │   linear barcode image library / QR raster from module grid     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Data transfer types (descriptors, requests, results)
//! - [`registry`] - The static table of supported symbologies
//! - [`validation`] - Introspectable per-symbology validation rules
//! - [`checksum`] - Weighted mod-10 check digit math
//! - [`qr`] - QR module-grid extraction and render cell sizing
//! - [`encode`] - The encode orchestrator (validate, normalize)
//! - [`error`] - Typed encode/render errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Camera, storage, and network access is FORBIDDEN here
//! 3. **Explicit Errors**: All failures are typed values, never panics
//! 4. **Data flows one way**: raw text → registry → rules → normalized payload
//!
//! ## Example Usage
//!
//! ```rust
//! use scanforge_core::encode::encode;
//! use scanforge_core::registry::FormatRegistry;
//!
//! let registry = FormatRegistry::default();
//!
//! // 12-digit short form: the EAN-13 check digit is computed and appended
//! let result = encode(&registry, "ean13", "400638133393").unwrap();
//! assert_eq!(result.value, "4006381333931");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checksum;
pub mod encode;
pub mod error;
pub mod qr;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use scanforge_core::FormatRegistry` instead of
// `use scanforge_core::registry::FormatRegistry`

pub use encode::{encode, encode_request};
pub use error::{EncodeError, RenderError};
pub use registry::FormatRegistry;
pub use types::{EncodeRequest, EncodedValue, SymbologyDescriptor, SymbologyKind};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum input length for CODE128.
///
/// ## Business Reason
/// Longer payloads produce barcodes too wide to scan reliably from a phone
/// screen. The generator screen clamps input at this length and the
/// orchestrator re-checks it.
pub const CODE128_MAX_LENGTH: usize = 80;

/// Smallest value Pharmacode can express.
pub const PHARMACODE_MIN: u32 = 3;

/// Largest value Pharmacode can express (2^17 - 2).
pub const PHARMACODE_MAX: u32 = 131_070;
