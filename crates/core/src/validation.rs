//! Identifier validation and check-digit completion.
//!
//! [`validate`] reports validity as data: a string that is not a valid CUI is a normal outcome,
//! not an error. [`compute_and_append`] completes an 18-character base and does fail on bad input.

use crate::checksum::{compute_check_digits, CheckDigits};
use crate::constants::{BASE_LEN, CUI_LEN};
use crate::cui::{split_base, Cui};
use crate::{CuiError, CuiResult};

/// Why a validation came out the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationOutcome {
    /// The check digits match.
    Valid,
    /// The input is not 20 characters long.
    WrongLength,
    /// The base could not be checksummed (bad prefix, non-digit content).
    Malformed,
    /// The base is well-formed but the check digits do not match it.
    Mismatch,
}

/// The result of validating a candidate CUI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// The digits the base actually checksums to, when they differ from the supplied ones.
    pub correct_digits: Option<CheckDigits>,
    pub message: String,
    pub outcome: ValidationOutcome,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            valid: true,
            correct_digits: None,
            message: "CUI is valid".into(),
            outcome: ValidationOutcome::Valid,
        }
    }

    fn invalid(outcome: ValidationOutcome, message: String) -> Self {
        Self {
            valid: false,
            correct_digits: None,
            message,
            outcome,
        }
    }
}

/// Validates a candidate identifier.
///
/// Never fails: wrong length, malformed bases and mismatching check digits are all reported
/// through the returned [`ValidationResult`].
pub fn validate(identifier: &str) -> ValidationResult {
    match check(identifier) {
        Ok(_) => ValidationResult::valid(),
        Err(result) => result,
    }
}

/// Returns the check digits of a valid identifier, or the failed [`ValidationResult`].
pub(crate) fn check(identifier: &str) -> Result<CheckDigits, ValidationResult> {
    let len = identifier.chars().count();
    if len != CUI_LEN {
        return Err(ValidationResult::invalid(
            ValidationOutcome::WrongLength,
            format!("CUI is invalid: it must have exactly {CUI_LEN} characters, got {len}"),
        ));
    }

    let (base, provided) = split_base(identifier);
    match compute_check_digits(base) {
        Ok(expected) if expected == *provided => Ok(expected),
        Ok(expected) => Err(ValidationResult {
            correct_digits: Some(expected),
            ..ValidationResult::invalid(ValidationOutcome::Mismatch, "CUI is invalid".into())
        }),
        Err(e) => Err(ValidationResult::invalid(
            ValidationOutcome::Malformed,
            format!("validation error: {e}"),
        )),
    }
}

/// Check digits computed for a base, and the full identifier they complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckDigitsResult {
    pub check_digits: CheckDigits,
    pub cui: Cui,
}

/// Computes the check digits for an 18-character `PT`-prefixed base and appends them.
///
/// # Errors
///
/// - [`CuiError::WrongLength`] if `base` is not 18 characters.
/// - Any error from [`compute_check_digits`] (an 18-character base without the `PT` prefix, or
///   non-digit content).
pub fn compute_and_append(base: &str) -> CuiResult<CheckDigitsResult> {
    let len = base.chars().count();
    if len != BASE_LEN {
        return Err(CuiError::WrongLength {
            what: "base",
            expected: BASE_LEN,
            actual: len,
        });
    }

    let check_digits = compute_check_digits(base)?;
    Ok(CheckDigitsResult {
        check_digits,
        cui: Cui::from_parts(base, check_digits),
    })
}
