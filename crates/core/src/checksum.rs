//! Check-digit computation.
//!
//! The 16-digit numeric part of a base string is reduced modulo 529 one digit at a time, so no
//! intermediate value exceeds `528 * 10 + 9`. The residue is then written in base 23 using
//! [`ALPHABET`]: the quotient selects the first symbol and the remainder the second.
//!
//! ```text
//! PT1234000000000000 -> 1234000000000000 mod 529 = 310 -> (13, 11) -> "JB"
//! ```

use crate::constants::{ALPHABET, CHECK_DIGITS_LEN, MODULUS, NUMERIC_LEN, PREFIX};
use crate::{CuiError, CuiResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// The two-symbol checksum suffix of a CUI.
///
/// Always holds two symbols from [`ALPHABET`]. Displays as the 2-character string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckDigits([char; 2]);

impl CheckDigits {
    /// Encodes a residue in `0..529` as two alphabet symbols.
    ///
    /// Residues outside that range are reduced first.
    pub fn from_residue(residue: u32) -> Self {
        let residue = residue % MODULUS;
        let base = ALPHABET.len() as u32;
        let a = (residue / base) as usize;
        let b = (residue % base) as usize;
        Self([ALPHABET[a], ALPHABET[b]])
    }

    /// Returns the residue these symbols encode.
    pub fn residue(&self) -> u32 {
        let base = ALPHABET.len() as u32;
        position(self.0[0]) * base + position(self.0[1])
    }

    /// Returns the two symbols.
    pub fn chars(&self) -> [char; 2] {
        self.0
    }
}

fn position(symbol: char) -> u32 {
    // Construction only ever stores alphabet symbols.
    ALPHABET.iter().position(|&c| c == symbol).unwrap_or(0) as u32
}

impl fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl FromStr for CheckDigits {
    type Err = CuiError;

    /// Parses two uppercase alphabet symbols. Lowercase is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CHECK_DIGITS_LEN {
            return Err(CuiError::WrongLength {
                what: "check digits",
                expected: CHECK_DIGITS_LEN,
                actual: chars.len(),
            });
        }
        for (position, &ch) in chars.iter().enumerate() {
            if !ALPHABET.contains(&ch) {
                return Err(CuiError::InvalidCharacter { ch, position });
            }
        }
        Ok(Self([chars[0], chars[1]]))
    }
}

impl PartialEq<str> for CheckDigits {
    fn eq(&self, other: &str) -> bool {
        let mut chars = other.chars();
        chars.next() == Some(self.0[0]) && chars.next() == Some(self.0[1]) && chars.next().is_none()
    }
}

impl PartialEq<&str> for CheckDigits {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for CheckDigits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CheckDigits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Strips an optional leading `PT` from `base`.
pub fn numeric_part(base: &str) -> &str {
    base.strip_prefix(PREFIX).unwrap_or(base)
}

/// Computes the modulo-529 residue of a base string's 16-digit numeric part.
///
/// # Errors
///
/// Returns [`CuiError::WrongLength`] if the numeric part (after an optional `PT`) is not 16
/// characters, or [`CuiError::InvalidCharacter`] on the first non-digit.
pub fn residue(base: &str) -> CuiResult<u32> {
    let numeric = numeric_part(base);

    let len = numeric.chars().count();
    if len != NUMERIC_LEN {
        return Err(CuiError::WrongLength {
            what: "numeric part",
            expected: NUMERIC_LEN,
            actual: len,
        });
    }

    let mut acc = 0u32;
    for (position, ch) in numeric.chars().enumerate() {
        let digit = ch
            .to_digit(10)
            .ok_or(CuiError::InvalidCharacter { ch, position })?;
        acc = (acc * 10 + digit) % MODULUS;
    }
    Ok(acc)
}

/// Computes the check digits for a base string.
///
/// `base` is either the 18-character `PT`-prefixed form or the bare 16-digit numeric part.
///
/// # Errors
///
/// See [`residue`].
pub fn compute_check_digits(base: &str) -> CuiResult<CheckDigits> {
    residue(base).map(CheckDigits::from_residue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_base_yields_tt() {
        assert_eq!(compute_check_digits("PT0000000000000000").unwrap(), "TT");
    }

    #[test]
    fn test_prefix_is_optional() {
        assert_eq!(compute_check_digits("0000000000000000").unwrap(), "TT");
        assert_eq!(compute_check_digits("1234000000000000").unwrap(), "JB");
    }

    #[test]
    fn test_golden_vectors() {
        let vectors = [
            ("PT1234000000000000", 310, "JB"),
            ("PT1234567890123456", 8, "TP"),
            ("PT0001000000000001", 129, "MZ"),
            ("PT9999999999999999", 348, "SA"),
            ("PT0000000000000528", 528, "EE"),
            ("PT0000000000000529", 0, "TT"),
        ];
        for (base, expected_residue, expected_digits) in vectors {
            assert_eq!(residue(base).unwrap(), expected_residue, "residue of {base}");
            assert_eq!(
                compute_check_digits(base).unwrap().to_string(),
                expected_digits,
                "check digits of {base}"
            );
        }
    }

    #[test]
    fn test_residue_matches_wide_arithmetic() {
        let base = "PT8765432109876543";
        let wide: u64 = numeric_part(base).parse().unwrap();
        assert_eq!(residue(base).unwrap() as u64, wide % MODULUS as u64);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        for base in ["", "PT", "PT123", "PT00000000000000000", "000000000000000"] {
            let err = compute_check_digits(base).unwrap_err();
            assert!(err.is_length_error(), "{base:?} gave {err}");
            assert!(err.to_string().contains("16 characters"));
        }
    }

    #[test]
    fn test_non_digit_is_rejected_with_position() {
        let err = compute_check_digits("PT12340000000000X0").unwrap_err();
        assert_eq!(
            err,
            CuiError::InvalidCharacter {
                ch: 'X',
                position: 14
            }
        );
        assert!(!err.is_length_error());
    }

    #[test]
    fn test_unprefixed_eighteen_chars_is_a_length_error() {
        // Only an exact uppercase `PT` is stripped.
        let err = compute_check_digits("pt1234000000000000").unwrap_err();
        assert!(err.is_length_error());
        let err = compute_check_digits("ES1234000000000000").unwrap_err();
        assert!(err.is_length_error());
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        // Arabic-Indic digit; counted as one character, rejected as content.
        let err = compute_check_digits("PT123400000000000\u{0661}").unwrap_err();
        assert!(matches!(err, CuiError::InvalidCharacter { position: 15, .. }));
    }

    #[test]
    fn test_from_residue_covers_whole_range() {
        for r in 0..MODULUS {
            let digits = CheckDigits::from_residue(r);
            assert_eq!(digits.residue(), r);
            assert!(digits.chars().iter().all(|c| ALPHABET.contains(c)));
        }
    }

    #[test]
    fn test_check_digits_parse() {
        let digits: CheckDigits = "JB".parse().unwrap();
        assert_eq!(digits.residue(), 310);
        assert!("jb".parse::<CheckDigits>().is_err());
        assert!("J".parse::<CheckDigits>().is_err());
        assert!("JBT".parse::<CheckDigits>().is_err());
        assert!("JI".parse::<CheckDigits>().is_err());
    }

    #[test]
    fn test_check_digits_serde_as_string() {
        let digits = CheckDigits::from_residue(310);
        assert_eq!(serde_json::to_string(&digits).unwrap(), "\"JB\"");
        let back: CheckDigits = serde_json::from_str("\"JB\"").unwrap();
        assert_eq!(back, digits);
    }
}
