//! Request and response bodies.
//!
//! Request types carry exactly the fields each operation needs, so a body with missing or
//! mistyped fields is rejected during deserialisation and never reaches the core.

use cui_core::{CheckDigitsResult, CuiError, GeneratedIdentifier, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReq {
    /// 4-character operator code.
    #[schema(example = "1234")]
    pub operator: String,
    /// Number of random trailing digits in the local code (1 to 12). A decimal string such as
    /// `"6"` is accepted too.
    #[schema(example = 6)]
    #[serde(deserialize_with = "integer_or_decimal_string")]
    pub random_digits: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerOrString {
    Integer(i64),
    String(String),
}

fn integer_or_decimal_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match IntegerOrString::deserialize(deserializer)? {
        IntegerOrString::Integer(n) => Ok(n),
        IntegerOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRes {
    #[schema(example = "PT1234000000000000JB")]
    pub cui: String,
    pub prefix: String,
    pub operator: String,
    pub local_code: String,
    pub check_digits: String,
    pub random_digits: u8,
    pub random_part: String,
}

impl From<GeneratedIdentifier> for GenerateRes {
    fn from(generated: GeneratedIdentifier) -> Self {
        Self {
            cui: generated.cui.into_string(),
            prefix: generated.prefix.to_string(),
            operator: generated.operator,
            local_code: generated.local_code,
            check_digits: generated.check_digits.to_string(),
            random_digits: generated.random_digits.get(),
            random_part: generated.random_part,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidateReq {
    #[schema(example = "PT1234000000000000JB")]
    pub cui: String,
}

/// `correctDigits` is `null` unless the base is well-formed and the supplied digits are wrong.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRes {
    pub valid: bool,
    pub correct_digits: Option<String>,
    pub message: String,
}

impl ValidateRes {
    /// A `valid: false` answer for a request that never reached validation.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            correct_digits: None,
            message: message.into(),
        }
    }
}

impl From<ValidationResult> for ValidateRes {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.valid,
            correct_digits: result.correct_digits.map(|d| d.to_string()),
            message: result.message,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckDigitsReq {
    /// 18-character base: `PT`, 4-digit operator, 12-digit local code.
    #[schema(example = "PT1234000000000000")]
    pub base: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckDigitsRes {
    #[schema(example = "JB")]
    pub check_digits: String,
    #[schema(example = "PT1234000000000000JB")]
    pub cui: String,
}

impl From<CheckDigitsResult> for CheckDigitsRes {
    fn from(result: CheckDigitsResult) -> Self {
        Self {
            check_digits: result.check_digits.to_string(),
            cui: result.cui.into_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl From<&CuiError> for ErrorRes {
    fn from(e: &CuiError) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    #[schema(example = "healthy")]
    pub status: String,
    /// RFC 3339 time the probe was answered.
    pub timestamp: String,
    /// Seconds since the process started.
    pub uptime: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_req_uses_camel_case() {
        let req: GenerateReq =
            serde_json::from_value(json!({"operator": "1234", "randomDigits": 3})).unwrap();
        assert_eq!(req.operator, "1234");
        assert_eq!(req.random_digits, 3);
    }

    #[test]
    fn test_generate_req_accepts_decimal_string_count() {
        let req: GenerateReq =
            serde_json::from_value(json!({"operator": "1234", "randomDigits": "6"})).unwrap();
        assert_eq!(req.random_digits, 6);
        let req: GenerateReq =
            serde_json::from_value(json!({"operator": "1234", "randomDigits": " 13 "})).unwrap();
        assert_eq!(req.random_digits, 13);
    }

    #[test]
    fn test_generate_req_rejects_missing_fields() {
        assert!(serde_json::from_value::<GenerateReq>(json!({"operator": "1234"})).is_err());
        assert!(serde_json::from_value::<GenerateReq>(
            json!({"operator": "1234", "randomDigits": "three"})
        )
        .is_err());
        assert!(serde_json::from_value::<GenerateReq>(
            json!({"operator": "1234", "randomDigits": 6.5})
        )
        .is_err());
    }

    #[test]
    fn test_rejected_validate_res() {
        assert_eq!(
            serde_json::to_value(ValidateRes::rejected("missing cui")).unwrap(),
            json!({"valid": false, "correctDigits": null, "message": "missing cui"})
        );
        assert_eq!(ErrorRes::new("bad").error, "bad");
    }

    #[test]
    fn test_validate_res_serialises_null_correct_digits() {
        let res = ValidateRes::from(cui_core::validate("PT1234000000000000JB"));
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({"valid": true, "correctDigits": null, "message": "CUI is valid"})
        );
    }

    #[test]
    fn test_validate_res_carries_correct_digits() {
        let res = ValidateRes::from(cui_core::validate("PT1234000000000000TT"));
        assert!(!res.valid);
        assert_eq!(res.correct_digits.as_deref(), Some("JB"));
    }

    #[test]
    fn test_check_digits_res_from_result() {
        let res = CheckDigitsRes::from(cui_core::compute_and_append("PT1234000000000000").unwrap());
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({"checkDigits": "JB", "cui": "PT1234000000000000JB"})
        );
    }

    #[test]
    fn test_generate_res_field_names() {
        let generated = cui_core::generate("1234", 4).unwrap();
        let value = serde_json::to_value(GenerateRes::from(generated)).unwrap();
        for key in [
            "cui",
            "prefix",
            "operator",
            "localCode",
            "checkDigits",
            "randomDigits",
            "randomPart",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["randomDigits"], 4);
        assert_eq!(value["prefix"], "PT");
    }
}
