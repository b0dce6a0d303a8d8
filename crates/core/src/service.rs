//! Service façade used by the transports.

use crate::builder::{self, GeneratedIdentifier};
use crate::validation::{self, CheckDigitsResult, ValidationResult};
use crate::CuiResult;

/// Stateless CUI operations - no API concerns.
///
/// Cheap to clone and safe to share between request handlers; every call is independent.
#[derive(Default, Clone, Debug)]
pub struct CuiService;

impl CuiService {
    /// Creates a new instance of CuiService.
    pub fn new() -> Self {
        Self
    }

    /// Generates a new identifier for `operator`.
    ///
    /// # Arguments
    /// * `operator` - 4-character operator code.
    /// * `random_digits` - How many trailing local-code digits are random (1 to 12).
    ///
    /// # Errors
    /// Returns a [`crate::CuiError`] if either argument is out of range or the operator is not
    /// numeric.
    pub fn generate(&self, operator: &str, random_digits: i64) -> CuiResult<GeneratedIdentifier> {
        let result = builder::generate(operator, random_digits);
        match &result {
            Ok(generated) => tracing::debug!(cui = %generated.cui, "generated CUI"),
            Err(e) => tracing::debug!(operator, random_digits, "generate rejected: {e}"),
        }
        result
    }

    /// Validates a candidate identifier. Invalid input is reported in the result, never as an
    /// error.
    pub fn validate(&self, cui: &str) -> ValidationResult {
        let result = validation::validate(cui);
        tracing::debug!(
            valid = result.valid,
            outcome = ?result.outcome,
            "validated CUI"
        );
        result
    }

    /// Computes the check digits for an 18-character base and returns the completed identifier.
    ///
    /// # Errors
    /// Returns a [`crate::CuiError`] if the base is not 18 characters or is not `PT` followed by
    /// 16 digits.
    pub fn check_digits(&self, base: &str) -> CuiResult<CheckDigitsResult> {
        let result = validation::compute_and_append(base);
        if let Err(e) = &result {
            tracing::debug!("check digits rejected: {e}");
        }
        result
    }
}
