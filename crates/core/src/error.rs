use crate::constants::{MAX_RANDOM_DIGITS, MIN_RANDOM_DIGITS, OPERATOR_LEN};
use crate::ValidationResult;

/// Errors raised by the core when an input violates a length or character-set precondition.
///
/// Every variant is an *invalid input* from the caller's point of view: the caller can fix the
/// input and retry. A CUI that is well-formed but carries the wrong check digits is **not** an
/// error; see [`crate::ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CuiError {
    #[error("invalid input: {what} must have {expected} characters, got {actual}")]
    WrongLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid input: invalid character {ch:?} at position {position} of the numeric part")]
    InvalidCharacter { ch: char, position: usize },
    #[error("invalid input: operator must have {} characters, got {0}", OPERATOR_LEN)]
    OperatorLength(usize),
    #[error(
        "invalid input: random digit count must be between {} and {}, got {0}",
        MIN_RANDOM_DIGITS,
        MAX_RANDOM_DIGITS
    )]
    RandomDigitCount(i64),
}

impl CuiError {
    /// Returns true if the input had the wrong length (as opposed to wrong content).
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            CuiError::WrongLength { .. } | CuiError::OperatorLength(_)
        )
    }
}

pub type CuiResult<T> = std::result::Result<T, CuiError>;

/// Returned by [`crate::Cui::parse`] when a string is not a valid CUI.
///
/// Carries the full [`ValidationResult`], so a check-digit mismatch stays a validation outcome
/// (with the correct digits attached) rather than becoming a [`CuiError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .0.message)]
pub struct InvalidCui(pub ValidationResult);

impl InvalidCui {
    pub fn result(&self) -> &ValidationResult {
        &self.0
    }

    pub fn into_result(self) -> ValidationResult {
        self.0
    }
}
