//! # CUI Core
//!
//! Core logic for issuing and validating CUI identifiers.
//!
//! A CUI is 20 characters: the `PT` prefix, a 4-digit operator code, a 12-digit local code and two
//! check symbols derived from the 16 digits modulo 529.
//!
//! This crate contains pure operations only:
//! - Check-digit computation ([`compute_check_digits`])
//! - Identifier generation ([`generate`])
//! - Identifier validation ([`validate`]) and base completion ([`compute_and_append`])
//!
//! **No API concerns**: HTTP servers, JSON shapes and CLI parsing belong in `api-rest`,
//! `api-shared` and `cui-cli`.

pub mod builder;
pub mod checksum;
pub mod constants;
pub mod cui;
pub mod error;
pub mod service;
pub mod validation;

pub use builder::{generate, generate_with_rng, GeneratedIdentifier, RandomDigitCount};
pub use checksum::{compute_check_digits, CheckDigits};
pub use cui::Cui;
pub use error::{CuiError, CuiResult, InvalidCui};
pub use service::CuiService;
pub use validation::{
    compute_and_append, validate, CheckDigitsResult, ValidationOutcome, ValidationResult,
};
