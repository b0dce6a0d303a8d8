//! Constants describing the CUI layout.
//!
//! A CUI is laid out as `PT` + operator (4) + local code (12) + check digits (2).

/// Country prefix carried by every generated identifier.
pub const PREFIX: &str = "PT";

/// Length of a full identifier, check digits included.
pub const CUI_LEN: usize = 20;

/// Length of the prefixed base string that check digits are computed over.
pub const BASE_LEN: usize = 18;

/// Length of the numeric part of the base (operator + local code).
pub const NUMERIC_LEN: usize = 16;

/// Length of the operator code.
pub const OPERATOR_LEN: usize = 4;

/// Length of the local code.
pub const LOCAL_CODE_LEN: usize = 12;

/// Length of the check-digit suffix.
pub const CHECK_DIGITS_LEN: usize = 2;

/// Smallest accepted random digit count.
pub const MIN_RANDOM_DIGITS: u8 = 1;

/// Largest accepted random digit count (the whole local code).
pub const MAX_RANDOM_DIGITS: u8 = LOCAL_CODE_LEN as u8;

/// Modulus of the checksum residue (23²).
pub const MODULUS: u32 = 529;

/// Symbols the residue is encoded with. The order is part of the identifier format.
pub const ALPHABET: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];
