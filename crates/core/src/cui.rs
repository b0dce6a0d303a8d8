//! The validated CUI type.
//!
//! A [`Cui`] is only ever constructed from input that has the canonical layout and correct
//! check digits:
//!
//! ```text
//! PT 1234 000000000000 JB
//! ^  ^    ^            ^
//! |  |    |            check digits (2, alphabet symbols)
//! |  |    local code (12 digits)
//! |  operator (4 digits)
//! prefix
//! ```
//!
//! Use [`Cui::parse`] for externally supplied identifiers. To find out *why* a string is not a
//! valid CUI without treating it as an error, use [`crate::validate`] instead.

use crate::checksum::CheckDigits;
use crate::constants::{BASE_LEN, OPERATOR_LEN, PREFIX};
use crate::validation::check;
use crate::InvalidCui;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// A 20-character identifier whose last two characters are the checksum of the first 18.
///
/// Once you hold a `Cui` you can rely on the layout: ASCII only, `PT` prefix, 16 digits, two
/// alphabet symbols. The accessors slice the stored string accordingly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cui {
    value: String,
    check_digits: CheckDigits,
}

impl Cui {
    /// Validates and wraps a full identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCui`] carrying the [`crate::ValidationResult`] that [`crate::validate`]
    /// reports for `input`: wrong length, a malformed base, or mismatching check digits.
    pub fn parse(input: &str) -> Result<Self, InvalidCui> {
        let check_digits = check(input).map_err(InvalidCui)?;
        Ok(Self {
            value: input.to_string(),
            check_digits,
        })
    }

    /// Joins a base that has already been checksummed with its check digits.
    pub(crate) fn from_parts(base: &str, check_digits: CheckDigits) -> Self {
        Self {
            value: format!("{base}{check_digits}"),
            check_digits,
        }
    }

    /// Returns true if `input` is a well-formed CUI with matching check digits.
    pub fn is_valid(input: &str) -> bool {
        check(input).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The 18-character base the check digits were computed over.
    pub fn base(&self) -> &str {
        &self.value[..BASE_LEN]
    }

    pub fn prefix(&self) -> &str {
        &self.value[..PREFIX.len()]
    }

    pub fn operator(&self) -> &str {
        &self.value[PREFIX.len()..PREFIX.len() + OPERATOR_LEN]
    }

    pub fn local_code(&self) -> &str {
        &self.value[PREFIX.len() + OPERATOR_LEN..BASE_LEN]
    }

    pub fn check_digits(&self) -> CheckDigits {
        self.check_digits
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

/// Splits a 20-character string into its 18-character base and the remaining suffix.
///
/// Splits on character boundaries, so non-ASCII input never panics.
pub(crate) fn split_base(input: &str) -> (&str, &str) {
    let at = input
        .char_indices()
        .nth(BASE_LEN)
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    input.split_at(at)
}

impl fmt::Display for Cui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Cui {
    type Err = InvalidCui;

    /// Equivalent to [`Cui::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cui::parse(s)
    }
}

impl AsRef<str> for Cui {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for Cui {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Cui {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Cui::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationOutcome;

    const VALID: &str = "PT1234000000000000JB";

    #[test]
    fn test_parse_valid_cui() {
        let cui = Cui::parse(VALID).unwrap();
        assert_eq!(cui.to_string(), VALID);
        assert_eq!(cui.prefix(), "PT");
        assert_eq!(cui.operator(), "1234");
        assert_eq!(cui.local_code(), "000000000000");
        assert_eq!(cui.base(), "PT1234000000000000");
        assert_eq!(cui.check_digits(), "JB");
    }

    #[test]
    fn test_parse_rejects_wrong_check_digits() {
        let err = Cui::parse("PT1234000000000000JR").unwrap_err();
        assert_eq!(err.result().outcome, ValidationOutcome::Mismatch);
        assert_eq!(err.result().correct_digits.unwrap(), "JB");
        assert_eq!(err.into_result(), crate::validate("PT1234000000000000JR"));
    }

    #[test]
    fn test_parse_rejects_lowercase_check_digits() {
        assert!(Cui::parse("PT1234000000000000jb").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = Cui::parse("PT1234000000000000J").unwrap_err();
        assert_eq!(err.result().outcome, ValidationOutcome::WrongLength);
        assert_eq!(
            err.to_string(),
            "CUI is invalid: it must have exactly 20 characters, got 19"
        );
        assert!(Cui::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        let err = Cui::parse("ES1234000000000000JB").unwrap_err();
        assert_eq!(err.result().outcome, ValidationOutcome::Malformed);
    }

    #[test]
    fn test_parse_multibyte_input_does_not_panic() {
        let input = "PT1234000000000000ÉB";
        assert_eq!(input.chars().count(), 20);
        assert!(Cui::parse(input).is_err());
        assert!(Cui::parse("ПТ1234000000000000JB").is_err());
    }

    #[test]
    fn test_split_base() {
        assert_eq!(split_base(VALID), ("PT1234000000000000", "JB"));
        assert_eq!(split_base("short"), ("short", ""));
    }

    #[test]
    fn test_from_str_and_is_valid() {
        let cui: Cui = VALID.parse().unwrap();
        assert_eq!(cui.as_str(), VALID);
        assert!(Cui::is_valid(VALID));
        assert!(!Cui::is_valid("PT1234000000000001JB"));
    }

    #[test]
    fn test_serde_round_trip_rejects_invalid() {
        let cui = Cui::parse(VALID).unwrap();
        let json = serde_json::to_string(&cui).unwrap();
        assert_eq!(json, format!("\"{VALID}\""));
        assert_eq!(serde_json::from_str::<Cui>(&json).unwrap(), cui);
        assert!(serde_json::from_str::<Cui>("\"PT1234000000000000TT\"").is_err());
    }
}
