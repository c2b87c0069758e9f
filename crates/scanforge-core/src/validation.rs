//! # Validation Module
//!
//! Per-symbology input validation rules for ScanForge.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Generator screen (host UI)                                   │
//! │  ├── Input masking (digits-only keyboards, max-length clamps)          │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Encode orchestrator                                          │
//! │  ├── Trim / empty / max-length re-checks                               │
//! │  └── THIS MODULE: symbology rule evaluation                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Rendering backend                                            │
//! │  └── Rejects anything it still cannot encode (RenderError)             │
//! │                                                                         │
//! │  Defense in depth: the UI pre-clamps, the core never trusts it         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Tagged Enum Instead of Closures?
//! Each rule is data, not an opaque function pointer. That keeps the rule
//! structure introspectable - the registry table can be walked to generate
//! picker hints or exhaustive tests - and keeps every rule trivially `Copy`
//! and const-constructible for the static format table.

use serde::Serialize;
use ts_rs::TS;

use crate::checksum::ChecksumScheme;

// =============================================================================
// Validation Rule
// =============================================================================

/// The validation rule attached to a symbology descriptor.
///
/// Every variant is a total, side-effect-free predicate over the trimmed
/// input string. Emptiness and max-length are the orchestrator's checks and
/// are not repeated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Anything goes (QR encodes arbitrary text).
    AnyText,

    /// ASCII characters only (CODE128).
    Ascii,

    /// ASCII digits only, any length (MSI).
    Digits,

    /// ASCII digits at full or short-form length, with the check digit
    /// verified when present (EAN-13, EAN-8, UPC-A, ITF-14).
    Checksum(ChecksumScheme),

    /// ASCII digits with an even count (ITF pairs digits two per symbol).
    DigitsEvenLength,

    /// The CODE39 character set: `A-Z 0-9 - . $ / + %` and space,
    /// case-insensitive.
    Code39Charset,

    /// Codabar framing: starts and ends with `A`-`D` (case-insensitive),
    /// body limited to `0-9 - $ : / . +`.
    CodabarFrame,

    /// UPC-E structural check: 6-8 digits; 7- and 8-digit codes must lead
    /// with `0` or `1`. Deliberately shallow - no expansion to UPC-A and no
    /// check digit math - to stay compatible with what scanners in the
    /// field accept.
    UpcEStructure,

    /// Digits parsed as an integer that must fall inside `[min, max]`
    /// (Pharmacode).
    IntegerRange { min: u32, max: u32 },
}

impl ValidationRule {
    /// Evaluates the rule. Pure: equal input, equal answer, always.
    pub fn matches(&self, input: &str) -> bool {
        match *self {
            ValidationRule::AnyText => true,

            ValidationRule::Ascii => input.chars().all(|c| c.is_ascii()),

            ValidationRule::Digits => is_digits(input),

            ValidationRule::Checksum(scheme) => {
                if !is_digits(input) {
                    return false;
                }
                // Short form is accepted as-is; the orchestrator appends
                // the computed check digit during normalization.
                input.len() == scheme.payload_length()
                    || (input.len() == scheme.full_length() && scheme.is_valid(input))
            }

            ValidationRule::DigitsEvenLength => {
                is_digits(input) && !input.is_empty() && input.len() % 2 == 0
            }

            ValidationRule::Code39Charset => input.chars().all(is_code39_char),

            ValidationRule::CodabarFrame => {
                let bytes = input.as_bytes();
                if bytes.len() < 2 {
                    return false;
                }
                let first = bytes[0].to_ascii_uppercase();
                let last = bytes[bytes.len() - 1].to_ascii_uppercase();
                if !(b'A'..=b'D').contains(&first) || !(b'A'..=b'D').contains(&last) {
                    return false;
                }
                input[1..input.len() - 1].chars().all(is_codabar_body_char)
            }

            ValidationRule::UpcEStructure => {
                if !is_digits(input) || !(6..=8).contains(&input.len()) {
                    return false;
                }
                if input.len() >= 7 {
                    let lead = input.as_bytes()[0];
                    return lead == b'0' || lead == b'1';
                }
                true
            }

            // Digits-only gate first: the integer parser alone would let a
            // leading `+` through to the rendering backend.
            ValidationRule::IntegerRange { min, max } => {
                is_digits(input)
                    && input
                        .parse::<u32>()
                        .map_or(false, |n| (min..=max).contains(&n))
            }
        }
    }

    /// Produces the normalized value handed to the rendering backend.
    ///
    /// ## Preconditions
    /// `input` already passed [`ValidationRule::matches`].
    ///
    /// ## Normalization
    /// - Checksum short form: the computed check digit is appended
    /// - CODE39 / Codabar: uppercased per symbology convention
    /// - Everything else: passed through unchanged
    pub fn normalize(&self, input: &str) -> String {
        match *self {
            ValidationRule::Checksum(scheme) if input.len() == scheme.payload_length() => {
                let mut value = String::with_capacity(scheme.full_length());
                value.push_str(input);
                value.push((b'0' + scheme.compute_check_digit(input)) as char);
                value
            }
            ValidationRule::Code39Charset | ValidationRule::CodabarFrame => {
                input.to_ascii_uppercase()
            }
            _ => input.to_string(),
        }
    }
}

// =============================================================================
// Character Classes
// =============================================================================

#[inline]
fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// CODE39 charset, case-insensitive: letters, digits, `- . $ / + %`, space.
#[inline]
fn is_code39_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ' ' | '$' | '/' | '+' | '%')
}

/// Codabar body charset: digits and `- $ : / . +`.
#[inline]
fn is_codabar_body_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '$' | ':' | '/' | '.' | '+')
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::ChecksumScheme;
    use crate::{PHARMACODE_MAX, PHARMACODE_MIN};

    #[test]
    fn test_any_text() {
        assert!(ValidationRule::AnyText.matches("https://example.com/?q=日本語"));
    }

    #[test]
    fn test_ascii() {
        assert!(ValidationRule::Ascii.matches("Hello, World! 123"));
        assert!(!ValidationRule::Ascii.matches("héllo"));
    }

    #[test]
    fn test_digits() {
        assert!(ValidationRule::Digits.matches("0123456789"));
        assert!(!ValidationRule::Digits.matches("123a"));
        assert!(!ValidationRule::Digits.matches(""));
    }

    #[test]
    fn test_checksum_accepts_short_form_and_valid_full_form() {
        let rule = ValidationRule::Checksum(ChecksumScheme::Ean13);

        assert!(rule.matches("400638133393")); // 12 digits: short form
        assert!(rule.matches("4006381333931")); // full, check digit correct
        assert!(!rule.matches("4006381333930")); // full, check digit wrong
        assert!(!rule.matches("40063813339")); // 11 digits
        assert!(!rule.matches("40063813339x1"));
    }

    #[test]
    fn test_digits_even_length() {
        assert!(ValidationRule::DigitsEvenLength.matches("1234"));
        assert!(!ValidationRule::DigitsEvenLength.matches("123"));
        assert!(!ValidationRule::DigitsEvenLength.matches(""));
        assert!(!ValidationRule::DigitsEvenLength.matches("12a4"));
    }

    #[test]
    fn test_code39_charset_is_case_insensitive() {
        assert!(ValidationRule::Code39Charset.matches("CODE-39 $10/+5%"));
        assert!(ValidationRule::Code39Charset.matches("code-39"));
        assert!(!ValidationRule::Code39Charset.matches("code_39")); // underscore
        assert!(!ValidationRule::Code39Charset.matches("code:39")); // colon
    }

    #[test]
    fn test_codabar_frame() {
        assert!(ValidationRule::CodabarFrame.matches("A1234B"));
        assert!(ValidationRule::CodabarFrame.matches("a40156-$:.+d"));
        assert!(!ValidationRule::CodabarFrame.matches("1234")); // no frame
        assert!(!ValidationRule::CodabarFrame.matches("A1234E")); // E not a stop char
        assert!(!ValidationRule::CodabarFrame.matches("A12w4B")); // bad body char
        assert!(!ValidationRule::CodabarFrame.matches("A")); // too short to frame
    }

    #[test]
    fn test_upce_structure() {
        let rule = ValidationRule::UpcEStructure;

        assert!(rule.matches("123456")); // 6 digits: anything goes
        assert!(rule.matches("0123456")); // 7 digits leading 0
        assert!(rule.matches("11234567")); // 8 digits leading 1
        assert!(!rule.matches("2123456")); // 7 digits leading 2
        assert!(!rule.matches("12345")); // too short
        assert!(!rule.matches("112345678")); // too long
    }

    #[test]
    fn test_integer_range() {
        let rule = ValidationRule::IntegerRange {
            min: PHARMACODE_MIN,
            max: PHARMACODE_MAX,
        };

        assert!(rule.matches("3"));
        assert!(rule.matches("131070"));
        assert!(!rule.matches("2"));
        assert!(!rule.matches("131071"));
        assert!(!rule.matches("99999999999999999999")); // overflows u32
        assert!(!rule.matches("12x"));
    }

    #[test]
    fn test_integer_range_rejects_signed_forms() {
        let rule = ValidationRule::IntegerRange {
            min: PHARMACODE_MIN,
            max: PHARMACODE_MAX,
        };

        // u32's parser accepts a leading `+`; the charset must not
        assert!(!rule.matches("+3"));
        assert!(!rule.matches("+131070"));
        assert!(!rule.matches("-3"));
    }

    #[test]
    fn test_normalize_appends_check_digit_for_short_form() {
        let rule = ValidationRule::Checksum(ChecksumScheme::Ean13);
        assert_eq!(rule.normalize("400638133393"), "4006381333931");
        // Full-length input passes through untouched
        assert_eq!(rule.normalize("4006381333931"), "4006381333931");
    }

    #[test]
    fn test_normalize_uppercases_code39_and_codabar() {
        assert_eq!(ValidationRule::Code39Charset.normalize("abc-123"), "ABC-123");
        assert_eq!(ValidationRule::CodabarFrame.normalize("a1234b"), "A1234B");
    }

    #[test]
    fn test_normalize_passes_everything_else_through() {
        assert_eq!(ValidationRule::AnyText.normalize("MiXeD"), "MiXeD");
        assert_eq!(ValidationRule::Digits.normalize("0042"), "0042");
    }
}
