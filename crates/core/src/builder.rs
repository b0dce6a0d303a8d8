//! Identifier generation.
//!
//! A generated local code is `12 - n` leading zeros followed by `n` random decimal digits, where
//! `n` is the caller's [`RandomDigitCount`]. The randomness source is a parameter so callers and
//! tests can supply their own; [`generate`] uses the thread-local generator.

use crate::checksum::{compute_check_digits, CheckDigits};
use crate::constants::{LOCAL_CODE_LEN, MAX_RANDOM_DIGITS, MIN_RANDOM_DIGITS, OPERATOR_LEN, PREFIX};
use crate::cui::Cui;
use crate::{CuiError, CuiResult};
use rand::Rng;

/// How many of the 12 local-code digits are random. Always in `1..=12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RandomDigitCount(u8);

impl RandomDigitCount {
    /// # Errors
    ///
    /// Returns [`CuiError::RandomDigitCount`] if `count` is outside `1..=12`.
    pub fn new(count: i64) -> CuiResult<Self> {
        if (MIN_RANDOM_DIGITS as i64..=MAX_RANDOM_DIGITS as i64).contains(&count) {
            Ok(Self(count as u8))
        } else {
            Err(CuiError::RandomDigitCount(count))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of zero-padded digits in front of the random part.
    pub fn fixed(self) -> usize {
        LOCAL_CODE_LEN - self.0 as usize
    }
}

impl Default for RandomDigitCount {
    /// The whole local code is random.
    fn default() -> Self {
        Self(MAX_RANDOM_DIGITS)
    }
}

/// A freshly generated identifier together with the parts it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedIdentifier {
    pub cui: Cui,
    pub prefix: &'static str,
    pub operator: String,
    pub local_code: String,
    pub check_digits: CheckDigits,
    pub random_digits: RandomDigitCount,
    pub random_part: String,
}

/// Generates an identifier for `operator` using the thread-local random generator.
///
/// # Errors
///
/// See [`generate_with_rng`].
pub fn generate(operator: &str, random_digits: i64) -> CuiResult<GeneratedIdentifier> {
    generate_with_rng(operator, random_digits, &mut rand::thread_rng())
}

/// Generates an identifier for `operator`, drawing random digits from `rng`.
///
/// The operator is only checked for length here. A non-digit operator is rejected when the
/// check digits are computed.
///
/// # Errors
///
/// - [`CuiError::OperatorLength`] if `operator` is not 4 characters.
/// - [`CuiError::RandomDigitCount`] if `random_digits` is outside `1..=12`.
/// - [`CuiError::InvalidCharacter`] if `operator` contains a non-digit.
pub fn generate_with_rng<R: Rng>(
    operator: &str,
    random_digits: i64,
    rng: &mut R,
) -> CuiResult<GeneratedIdentifier> {
    let operator_len = operator.chars().count();
    if operator_len != OPERATOR_LEN {
        return Err(CuiError::OperatorLength(operator_len));
    }
    let random_digits = RandomDigitCount::new(random_digits)?;

    let random_part = random_code(random_digits.get() as usize, rng);
    let local_code = format!("{}{}", "0".repeat(random_digits.fixed()), random_part);
    let base = format!("{PREFIX}{operator}{local_code}");
    let check_digits = compute_check_digits(&base)?;

    Ok(GeneratedIdentifier {
        cui: Cui::from_parts(&base, check_digits),
        prefix: PREFIX,
        operator: operator.to_string(),
        local_code,
        check_digits,
        random_digits,
        random_part,
    })
}

/// Draws `len` independent uniform decimal digits.
fn random_code<R: Rng>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
