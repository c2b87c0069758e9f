//! # Encode Orchestrator
//!
//! The single entry point the generator screen calls on submit.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  encode("ean13", " 400638133393 ")                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. registry lookup ────────── miss ──► UnknownFormat (fail fast)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. trim ───────────────────── empty ─► EmptyInput                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. max-length re-check ────── over ──► TooLong                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. symbology rule ─────────── fail ──► Invalid(validation_message)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. normalize (check digit append / uppercase)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  6. EncodedValue { "4006381333931", "ean13" }                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All failures are deterministic given the same input, reported
//! synchronously, and never retried.

use crate::error::{EncodeError, EncodeResult};
use crate::registry::FormatRegistry;
use crate::types::{EncodeRequest, EncodedValue};

/// Validates `raw_input` against the symbology `format_id` and, on success,
/// returns the normalized value for the rendering backend.
///
/// ## Example
/// ```rust
/// use scanforge_core::{encode, EncodeError, FormatRegistry};
///
/// let registry = FormatRegistry::default();
///
/// let ok = encode(&registry, "codabar", "a1234b").unwrap();
/// assert_eq!(ok.value, "A1234B");
///
/// let err = encode(&registry, "codabar", "1234").unwrap_err();
/// assert!(matches!(err, EncodeError::Invalid { .. }));
/// ```
pub fn encode(
    registry: &FormatRegistry,
    format_id: &str,
    raw_input: &str,
) -> EncodeResult<EncodedValue> {
    let descriptor = registry.get(format_id)?;

    let input = raw_input.trim();
    if input.is_empty() {
        return Err(EncodeError::EmptyInput);
    }

    // The UI pre-clamps via input masking; re-check anyway.
    if let Some(max) = descriptor.max_length {
        if input.chars().count() > max {
            return Err(EncodeError::TooLong { max });
        }
    }

    if !descriptor.validate(input) {
        return Err(EncodeError::Invalid {
            message: descriptor.validation_message.to_string(),
        });
    }

    Ok(EncodedValue {
        value: descriptor.rule.normalize(input),
        format_id: descriptor.id.to_string(),
    })
}

/// IPC-friendly wrapper: encodes a deserialized [`EncodeRequest`] as-is.
pub fn encode_request(
    registry: &FormatRegistry,
    request: &EncodeRequest,
) -> EncodeResult<EncodedValue> {
    encode(registry, &request.format_id, &request.raw_input)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> FormatRegistry {
        FormatRegistry::default()
    }

    #[test]
    fn test_ean13_short_form_appends_check_digit() {
        let result = encode(&registry(), "ean13", "400638133393").unwrap();
        assert_eq!(result.value, "4006381333931");
        assert_eq!(result.format_id, "ean13");
    }

    #[test]
    fn test_ean13_full_form_passes_through() {
        let result = encode(&registry(), "ean13", "4006381333931").unwrap();
        assert_eq!(result.value, "4006381333931");
    }

    #[test]
    fn test_ean13_bad_check_digit_names_the_constraint() {
        let err = encode(&registry(), "ean13", "4006381333930").unwrap_err();
        assert_eq!(
            err,
            EncodeError::Invalid {
                message: "must be 12 or 13 digits with a valid check digit".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_format_fails_fast() {
        let err = encode(&registry(), "ean99", "123").unwrap_err();
        assert_eq!(err, EncodeError::UnknownFormat("ean99".to_string()));
    }

    #[test]
    fn test_empty_input_after_trim() {
        assert_eq!(encode(&registry(), "qr", "").unwrap_err(), EncodeError::EmptyInput);
        assert_eq!(
            encode(&registry(), "qr", "   ").unwrap_err(),
            EncodeError::EmptyInput
        );
    }

    #[test]
    fn test_input_is_trimmed_before_validation() {
        let result = encode(&registry(), "ean8", " 9638507 ").unwrap();
        assert_eq!(result.value, "96385074");
    }

    #[test]
    fn test_too_long_is_rechecked() {
        let err = encode(&registry(), "code128", &"x".repeat(81)).unwrap_err();
        assert_eq!(err, EncodeError::TooLong { max: 80 });

        // 14 digits can never be EAN-13; length ceiling trips before the rule
        let err = encode(&registry(), "ean13", "40063813339311").unwrap_err();
        assert_eq!(err, EncodeError::TooLong { max: 13 });
    }

    #[test]
    fn test_codabar_frame_and_uppercasing() {
        let result = encode(&registry(), "codabar", "A1234B").unwrap();
        assert_eq!(result.value, "A1234B");

        let result = encode(&registry(), "codabar", "a1234b").unwrap();
        assert_eq!(result.value, "A1234B");

        let err = encode(&registry(), "codabar", "1234").unwrap_err();
        assert!(matches!(err, EncodeError::Invalid { .. }));
    }

    #[test]
    fn test_code39_uppercases() {
        let result = encode(&registry(), "code39", "abc-123 $5").unwrap();
        assert_eq!(result.value, "ABC-123 $5");
    }

    #[test]
    fn test_itf_even_length() {
        assert!(encode(&registry(), "itf", "1234").is_ok());
        assert!(matches!(
            encode(&registry(), "itf", "123").unwrap_err(),
            EncodeError::Invalid { .. }
        ));
    }

    #[test]
    fn test_pharmacode_range_edges() {
        assert!(encode(&registry(), "pharmacode", "3").is_ok());
        assert_eq!(
            encode(&registry(), "pharmacode", "131070").unwrap().value,
            "131070"
        );
        assert!(encode(&registry(), "pharmacode", "2").is_err());
        assert!(encode(&registry(), "pharmacode", "131071").is_err());
    }

    #[test]
    fn test_pharmacode_rejects_plus_prefixed_numbers() {
        // "+3" parses as a u32 but is not a digit string; it must never
        // reach the rendering backend
        let err = encode(&registry(), "pharmacode", "+3").unwrap_err();
        assert!(matches!(err, EncodeError::Invalid { .. }));
    }

    #[test]
    fn test_upce_preserves_shallow_structural_check() {
        assert!(encode(&registry(), "upce", "654321").is_ok());
        assert!(encode(&registry(), "upce", "0123456").is_ok());
        assert!(encode(&registry(), "upce", "2123456").is_err());
    }

    #[test]
    fn test_upca_short_form() {
        let result = encode(&registry(), "upca", "03600029145").unwrap();
        assert_eq!(result.value, "036000291452");
    }

    #[test]
    fn test_itf14_short_form() {
        let result = encode(&registry(), "itf14", "1234567890123").unwrap();
        assert_eq!(result.value, "12345678901235");
    }

    #[test]
    fn test_qr_accepts_arbitrary_text() {
        let result = encode(&registry(), "qr", "WIFI:S:cafe;P:espresso;;").unwrap();
        assert_eq!(result.value, "WIFI:S:cafe;P:espresso;;");
        assert_eq!(result.format_id, "qr");
    }

    #[test]
    fn test_encode_request_wrapper() {
        let request = EncodeRequest {
            format_id: "upca".to_string(),
            raw_input: "03600029145".to_string(),
        };
        let result = encode_request(&registry(), &request).unwrap();
        assert_eq!(result.value, "036000291452");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode(&registry(), "ean13", "400638133393").unwrap();
        let b = encode(&registry(), "ean13", "400638133393").unwrap();
        assert_eq!(a, b);
    }
}
