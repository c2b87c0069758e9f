//! # Format Registry
//!
//! The static table of supported symbologies and lookup by id.
//!
//! ## Supported Symbologies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ id         │ length        │ charset        │ checksum                  │
//! ├────────────┼───────────────┼────────────────┼───────────────────────────┤
//! │ qr         │ none          │ any            │ none                      │
//! │ code128    │ 1-80          │ any ASCII      │ none                      │
//! │ ean13      │ 12 or 13      │ digits         │ mod-10, auto-completes    │
//! │ ean8       │ 7 or 8        │ digits         │ mod-10, auto-completes    │
//! │ upca       │ 11 or 12      │ digits         │ mod-10, auto-completes    │
//! │ upce       │ 6-8           │ digits         │ structural only           │
//! │ code39     │ any           │ A-Z0-9 -.$/+%  │ none                      │
//! │ itf14      │ 13 or 14      │ digits         │ mod-10, auto-completes    │
//! │ itf        │ any even      │ digits         │ none                      │
//! │ msi        │ any           │ digits         │ none                      │
//! │ pharmacode │ value 3-131070│ digits         │ none                      │
//! │ codabar    │ any           │ A-D framed     │ none                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! Table order is significant: it drives the format picker in the generator
//! screen. QR comes first, then the linear formats in a stable declared
//! order. Do not reorder without checking the picker.
//!
//! ## Global State?
//! The table is process-wide immutable configuration - built once, never
//! mutated. It is still handed to the orchestrator as a [`FormatRegistry`]
//! value rather than reached for ambiently, so tests can swap in a narrower
//! table without process-wide setup.

use crate::checksum::ChecksumScheme;
use crate::error::{EncodeError, EncodeResult};
use crate::types::{SymbologyDescriptor, SymbologyKind};
use crate::validation::ValidationRule;
use crate::{CODE128_MAX_LENGTH, PHARMACODE_MAX, PHARMACODE_MIN};

// =============================================================================
// The Format Table
// =============================================================================

/// Every symbology ScanForge can generate, in picker order.
pub const FORMATS: &[SymbologyDescriptor] = &[
    SymbologyDescriptor {
        id: "qr",
        display_name: "QR Code",
        kind: SymbologyKind::Qr,
        encoded_format_tag: None,
        max_length: None,
        rule: ValidationRule::AnyText,
        validation_message: "value cannot be encoded as a QR code",
    },
    SymbologyDescriptor {
        id: "code128",
        display_name: "CODE128",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("CODE128"),
        max_length: Some(CODE128_MAX_LENGTH),
        rule: ValidationRule::Ascii,
        validation_message: "must contain only ASCII characters",
    },
    SymbologyDescriptor {
        id: "ean13",
        display_name: "EAN-13",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("EAN13"),
        max_length: Some(13),
        rule: ValidationRule::Checksum(ChecksumScheme::Ean13),
        validation_message: "must be 12 or 13 digits with a valid check digit",
    },
    SymbologyDescriptor {
        id: "ean8",
        display_name: "EAN-8",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("EAN8"),
        max_length: Some(8),
        rule: ValidationRule::Checksum(ChecksumScheme::Ean8),
        validation_message: "must be 7 or 8 digits with a valid check digit",
    },
    SymbologyDescriptor {
        id: "upca",
        display_name: "UPC-A",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("UPC"),
        max_length: Some(12),
        rule: ValidationRule::Checksum(ChecksumScheme::UpcA),
        validation_message: "must be 11 or 12 digits with a valid check digit",
    },
    SymbologyDescriptor {
        id: "upce",
        display_name: "UPC-E",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("UPCE"),
        max_length: Some(8),
        rule: ValidationRule::UpcEStructure,
        validation_message: "must be 6-8 digits; 7 and 8 digit codes must start with 0 or 1",
    },
    SymbologyDescriptor {
        id: "code39",
        display_name: "CODE39",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("CODE39"),
        max_length: None,
        rule: ValidationRule::Code39Charset,
        validation_message: "may only contain letters, digits, spaces, and - . $ / + %",
    },
    SymbologyDescriptor {
        id: "itf14",
        display_name: "ITF-14",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("ITF14"),
        max_length: Some(14),
        rule: ValidationRule::Checksum(ChecksumScheme::Itf14),
        validation_message: "must be 13 or 14 digits with a valid check digit",
    },
    SymbologyDescriptor {
        id: "itf",
        display_name: "ITF",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("ITF"),
        max_length: None,
        rule: ValidationRule::DigitsEvenLength,
        validation_message: "must be an even number of digits",
    },
    SymbologyDescriptor {
        id: "msi",
        display_name: "MSI",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("MSI"),
        max_length: None,
        rule: ValidationRule::Digits,
        validation_message: "must contain only digits",
    },
    SymbologyDescriptor {
        id: "pharmacode",
        display_name: "Pharmacode",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("pharmacode"),
        max_length: None,
        rule: ValidationRule::IntegerRange {
            min: PHARMACODE_MIN,
            max: PHARMACODE_MAX,
        },
        validation_message: "must be a number between 3 and 131070",
    },
    SymbologyDescriptor {
        id: "codabar",
        display_name: "Codabar",
        kind: SymbologyKind::LinearBarcode,
        encoded_format_tag: Some("codabar"),
        max_length: None,
        rule: ValidationRule::CodabarFrame,
        validation_message: "must start and end with A-D and contain only digits or - $ : / . +",
    },
];

// =============================================================================
// Format Registry
// =============================================================================

/// Read-only lookup over a symbology table.
///
/// ## Usage
/// ```rust
/// use scanforge_core::registry::FormatRegistry;
///
/// let registry = FormatRegistry::default();
///
/// // Picker order: QR first
/// assert_eq!(registry.formats()[0].id, "qr");
///
/// // Lookup by id
/// let ean13 = registry.get("ean13").unwrap();
/// assert_eq!(ean13.display_name, "EAN-13");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FormatRegistry {
    formats: &'static [SymbologyDescriptor],
}

impl FormatRegistry {
    /// Wraps an explicit table. Tests use this to narrow the registry.
    pub const fn with_formats(formats: &'static [SymbologyDescriptor]) -> Self {
        FormatRegistry { formats }
    }

    /// All registered symbologies in picker order.
    #[inline]
    pub fn formats(&self) -> &'static [SymbologyDescriptor] {
        self.formats
    }

    /// Looks up a symbology by id.
    pub fn get(&self, id: &str) -> EncodeResult<&'static SymbologyDescriptor> {
        self.formats
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| EncodeError::UnknownFormat(id.to_string()))
    }
}

/// The default registry wraps the built-in [`FORMATS`] table.
impl Default for FormatRegistry {
    fn default() -> Self {
        FormatRegistry::with_formats(FORMATS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
