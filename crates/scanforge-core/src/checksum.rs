//! # Checksum Module
//!
//! Weighted modulo-10 check digit math for the fixed-length numeric
//! symbologies: EAN-13, EAN-8, UPC-A, and ITF-14.
//!
//! ## How Weighted Mod-10 Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EAN-13 check digit for payload 4 0 0 6 3 8 1 3 3 3 9 3                │
//! │                                                                         │
//! │  index:   0  1  2  3  4  5  6  7  8  9 10 11   (0-based, left→right)  │
//! │  weight:  1  3  1  3  1  3  1  3  1  3  1  3                           │
//! │                                                                         │
//! │  sum  = 4·1 + 0·3 + 0·1 + 6·3 + 3·1 + 8·3 + 1·1 + 3·3                 │
//! │       + 3·1 + 3·3 + 9·1 + 3·3                  = 89                    │
//! │                                                                         │
//! │  check = (10 - (89 mod 10)) mod 10             = 1                     │
//! │                                                                         │
//! │  full code: 4006381333931                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Weighting Parity Asymmetry
//! EAN-13 and ITF-14 weight even 0-based indexes ×1 and odd ×3.
//! EAN-8 and UPC-A weight even indexes ×3 and odd ×1 - the inverse.
//! This is a documented property of these symbologies, not an inconsistency;
//! it falls out of anchoring the ×3 weight at the rightmost payload digit
//! while the payload length flips between even and odd.
//!
//! ## Contract
//! Both functions are pure and total over correctly sized numeric input.
//! Charset and length gating is the registry's job; these functions do only
//! arithmetic and do not re-validate the charset.

use serde::Serialize;
use ts_rs::TS;

// =============================================================================
// Checksum Scheme
// =============================================================================

/// The four checksummed symbologies, differing only in full code length and
/// weighting parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumScheme {
    /// 13 digits, even index ×1 / odd ×3.
    Ean13,
    /// 8 digits, even index ×3 / odd ×1.
    Ean8,
    /// 12 digits, even index ×3 / odd ×1.
    UpcA,
    /// 14 digits, same weighting as EAN-13.
    Itf14,
}

impl ChecksumScheme {
    /// Full code length including the trailing check digit.
    #[inline]
    pub const fn full_length(&self) -> usize {
        match self {
            ChecksumScheme::Ean13 => 13,
            ChecksumScheme::Ean8 => 8,
            ChecksumScheme::UpcA => 12,
            ChecksumScheme::Itf14 => 14,
        }
    }

    /// Payload length: one digit short of full, missing only the check digit.
    #[inline]
    pub const fn payload_length(&self) -> usize {
        self.full_length() - 1
    }

    /// Weights applied at (even, odd) 0-based payload indexes.
    #[inline]
    const fn weights(&self) -> (u32, u32) {
        match self {
            ChecksumScheme::Ean13 | ChecksumScheme::Itf14 => (1, 3),
            ChecksumScheme::Ean8 | ChecksumScheme::UpcA => (3, 1),
        }
    }

    /// Computes the check digit for a payload of `payload_length()` digits.
    ///
    /// ## Preconditions
    /// `payload` must be exactly `payload_length()` ASCII digits; the
    /// registry gates charset and length before calling in.
    ///
    /// ## Example
    /// ```rust
    /// use scanforge_core::checksum::ChecksumScheme;
    ///
    /// assert_eq!(ChecksumScheme::Ean13.compute_check_digit("400638133393"), 1);
    /// ```
    pub fn compute_check_digit(&self, payload: &str) -> u8 {
        debug_assert_eq!(payload.len(), self.payload_length());
        debug_assert!(payload.bytes().all(|b| b.is_ascii_digit()));

        let (even, odd) = self.weights();
        let sum: u32 = payload
            .bytes()
            .enumerate()
            .map(|(i, b)| {
                let digit = (b - b'0') as u32;
                digit * if i % 2 == 0 { even } else { odd }
            })
            .sum();

        ((10 - (sum % 10)) % 10) as u8
    }

    /// Verifies a full-length code: valid iff the trailing digit equals the
    /// check digit computed over the leading payload.
    ///
    /// Returns `false` for any length other than `full_length()`.
    ///
    /// ## Example
    /// ```rust
    /// use scanforge_core::checksum::ChecksumScheme;
    ///
    /// assert!(ChecksumScheme::Ean13.is_valid("4006381333931"));
    /// assert!(!ChecksumScheme::Ean13.is_valid("4006381333930"));
    /// ```
    pub fn is_valid(&self, code: &str) -> bool {
        if code.len() != self.full_length() {
            return false;
        }
        debug_assert!(code.bytes().all(|b| b.is_ascii_digit()));

        let (payload, check) = code.split_at(code.len() - 1);
        check.as_bytes()[0] - b'0' == self.compute_check_digit(payload)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13_known_vector() {
        // 4006381333931 is the standard EAN-13 test code
        assert_eq!(ChecksumScheme::Ean13.compute_check_digit("400638133393"), 1);
        assert!(ChecksumScheme::Ean13.is_valid("4006381333931"));
    }

    #[test]
    fn test_ean13_rejects_mismatched_check_digit() {
        for wrong in ["4006381333930", "4006381333932", "4006381333939"] {
            assert!(!ChecksumScheme::Ean13.is_valid(wrong), "{wrong}");
        }
    }

    #[test]
    fn test_ean8_known_vector() {
        // 96385074: payload 9638507, ×3 at even indexes
        // 9·3 + 6·1 + 3·3 + 8·1 + 5·3 + 0·1 + 7·3 = 86 → check 4
        assert_eq!(ChecksumScheme::Ean8.compute_check_digit("9638507"), 4);
        assert!(ChecksumScheme::Ean8.is_valid("96385074"));
        assert!(!ChecksumScheme::Ean8.is_valid("96385070"));
    }

    #[test]
    fn test_upca_known_vector() {
        // 036000291452 is the classic UPC-A example code
        assert_eq!(ChecksumScheme::UpcA.compute_check_digit("03600029145"), 2);
        assert!(ChecksumScheme::UpcA.is_valid("036000291452"));
        assert!(!ChecksumScheme::UpcA.is_valid("036000291453"));
    }

    #[test]
    fn test_itf14_uses_ean13_weighting() {
        // Same parity as EAN-13 (even ×1, odd ×3) over 13 payload digits:
        // payload 1234567890123
        // even idx (1,3,5,7,9,1,3)·1 = 1+3+5+7+9+1+3 = 29
        // odd idx  (2,4,6,8,0,2)·3   = 22·3 = 66
        // sum 95 → check 5
        assert_eq!(
            ChecksumScheme::Itf14.compute_check_digit("1234567890123"),
            5
        );
        assert!(ChecksumScheme::Itf14.is_valid("12345678901235"));
    }

    #[test]
    fn test_parity_is_inverted_between_families() {
        // Same 7-digit payload, different weighting per scheme family.
        // Ean8: even ×3 → 1·3+1·1+1·3+1·1+1·3+1·3... keep it simple with
        // a payload of all ones: Ean8 sum = 3+1+3+1+3+1+3 = 15 → check 5
        assert_eq!(ChecksumScheme::Ean8.compute_check_digit("1111111"), 5);
        // Ean13 over twelve ones: sum = 1+3 repeated 6 times = 24 → check 6
        assert_eq!(
            ChecksumScheme::Ean13.compute_check_digit("111111111111"),
            6
        );
    }

    #[test]
    fn test_wrong_length_is_never_valid() {
        assert!(!ChecksumScheme::Ean13.is_valid("400638133393")); // 12: short form
        assert!(!ChecksumScheme::Ean13.is_valid("40063813339311")); // 14
        assert!(!ChecksumScheme::Ean8.is_valid(""));
    }

    #[test]
    fn test_check_digit_is_deterministic() {
        let first = ChecksumScheme::UpcA.compute_check_digit("03600029145");
        for _ in 0..10 {
            assert_eq!(ChecksumScheme::UpcA.compute_check_digit("03600029145"), first);
        }
    }

    #[test]
    fn test_compute_then_verify_round_trip() {
        // For a handful of payloads, appending the computed digit must verify.
        for payload in ["000000000000", "123456789012", "999999999999"] {
            let check = ChecksumScheme::Ean13.compute_check_digit(payload);
            let full = format!("{payload}{check}");
            assert!(ChecksumScheme::Ean13.is_valid(&full), "{full}");
        }
    }

    #[test]
    fn test_lengths() {
        assert_eq!(ChecksumScheme::Ean13.full_length(), 13);
        assert_eq!(ChecksumScheme::Ean8.full_length(), 8);
        assert_eq!(ChecksumScheme::UpcA.full_length(), 12);
        assert_eq!(ChecksumScheme::Itf14.full_length(), 14);
        assert_eq!(ChecksumScheme::Itf14.payload_length(), 13);
    }
}
