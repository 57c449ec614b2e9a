//! Carrier recognition and tracking-code validation.

use std::fmt;

use crate::carrier::Carrier;
use crate::patterns;

/// Identifies the carrier whose grammar accepts `code`.
///
/// Carriers are tried in [`Carrier::ALL`] order and the first match wins, so
/// the result is deterministic even if a code satisfies several grammars.
/// Returns `None` when no carrier recognizes the code.
#[must_use]
pub fn recognize(code: &str) -> Option<Carrier> {
    Carrier::ALL
        .into_iter()
        .find(|&carrier| patterns::matches(carrier, code))
}

/// Returns `true` if at least one carrier recognizes `code`.
#[must_use]
pub fn is_valid(code: &str) -> bool {
    recognize(code).is_some()
}

/// A caller-supplied tracking code, kept exactly as given.
///
/// The text is never trimmed or case-folded; grammars handle whitespace and
/// case when matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingCode(String);

impl TrackingCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn carrier(&self) -> Option<Carrier> {
        recognize(&self.0)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid(&self.0)
    }
}

impl fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackingCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for TrackingCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for TrackingCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_one_sample_per_carrier() {
        let cases = [
            ("449044304137", Carrier::FedEx),
            ("1Z5R89390357567127", Carrier::Ups),
            ("03071790000523483741", Carrier::Usps),
            ("D10011234567890", Carrier::OnTrac),
            ("LX12345678", Carrier::LaserShip),
            ("1234567890", Carrier::Dhl),
            ("SHIPT12345678901", Carrier::Shipt),
            ("TBA1234567890", Carrier::Amazon),
        ];
        for (code, expected) in cases {
            assert_eq!(recognize(code), Some(expected), "code {code:?}");
            assert!(is_valid(code), "code {code:?} should be valid");
        }
    }

    #[test]
    fn recognizes_mixed_case_and_interior_whitespace() {
        assert_eq!(recognize("1z 5r8 9390 3575 6712 7"), Some(Carrier::Ups));
        assert_eq!(recognize("  lx 1234 5678  "), Some(Carrier::LaserShip));
        assert_eq!(recognize("Shipt 123 456 789 01"), Some(Carrier::Shipt));
    }

    #[test]
    fn every_carrier_recognized_through_whitespace_and_case() {
        let cases = [
            (" 4490 4430 4137 ", Carrier::FedEx),
            ("9611 0209 8765 4312 3456 72", Carrier::FedEx),
            ("1z 5r8 9390 3575 6712 7", Carrier::Ups),
            ("9400 1118 9922 3100 0000 00", Carrier::Usps),
            ("0307 1790 0005 2348 3741", Carrier::Usps),
            ("c 1001 1234 5678 90", Carrier::OnTrac),
            ("d1001 1234567890", Carrier::OnTrac),
            ("lw 1234 5678 9", Carrier::LaserShip),
            ("1ls 1234 5678 9012", Carrier::LaserShip),
            ("12 3456 7890", Carrier::Dhl),
            ("123 456 789 01", Carrier::Dhl),
            ("Shipt 1234 5678 901", Carrier::Shipt),
            ("tBa 123 456 789 012", Carrier::Amazon),
        ];
        for (code, expected) in cases {
            assert_eq!(recognize(code), Some(expected), "code {code:?}");
            assert!(is_valid(code), "code {code:?} should be valid");
        }
    }

    #[test]
    fn long_numeric_codes_resolve_to_their_own_carrier() {
        assert_eq!(
            recognize("9611020987654312345672"),
            Some(Carrier::FedEx),
            "96 prefix belongs to FedEx Ground"
        );
        assert_eq!(
            recognize("9400111899223100000000"),
            Some(Carrier::Usps),
            "94 prefix belongs to USPS IMpd"
        );
        assert_eq!(
            recognize("4201002334249200190132607600833457"),
            Some(Carrier::Usps)
        );
        assert_eq!(
            recognize("1001901781990001000300617767839437"),
            Some(Carrier::FedEx)
        );
    }

    #[test]
    fn unknown_shapes_are_unrecognized() {
        for code in ["hello123", "", "   ", "1Z5R8939035756712", "123456789", "TBA123"] {
            assert_eq!(recognize(code), None, "code {code:?}");
            assert!(!is_valid(code), "code {code:?} should be invalid");
        }
    }

    #[test]
    fn recognition_is_repeatable() {
        for code in ["449044304137", "hello123", "tba 123 456 789 0"] {
            let first = recognize(code);
            for _ in 0..5 {
                assert_eq!(recognize(code), first);
                assert_eq!(is_valid(code), first.is_some());
            }
        }
    }

    #[test]
    fn tracking_code_keeps_raw_text() {
        let code = TrackingCode::from(" 1z5r89390357567127 ");
        assert_eq!(code.as_str(), " 1z5r89390357567127 ");
        assert_eq!(code.to_string(), " 1z5r89390357567127 ");
        assert_eq!(code.carrier(), Some(Carrier::Ups));
        assert!(code.is_valid());
    }

    #[test]
    fn tracking_code_reports_unrecognized() {
        let code = TrackingCode::new(String::from("hello123"));
        assert_eq!(code.carrier(), None);
        assert!(!code.is_valid());
    }
}
