//! Request-field validation for the `/videos` endpoints.
//!
//! Bodies are inspected as raw JSON because the contract requires
//! field-specific messages, a fixed check order, and presence-sensitive
//! semantics (an absent field and a field of the wrong type are different
//! cases on update). A typed `Deserialize` DTO would collapse all of that
//! into a single generic deserialization error.

use serde_json::Value;

use crate::error::CoreError;

/// Extract a required string field.
///
/// Absent, `null`, or non-string values all fail with the field-specific
/// message (an absent field has no type, so it cannot be a string).
pub fn required_string(body: &Value, field: &str) -> Result<String, CoreError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(CoreError::Validation(format!("'{field}' deve ser string"))),
    }
}

/// Extract a required numeric field.
pub fn required_number(body: &Value, field: &str) -> Result<f64, CoreError> {
    match body.get(field).and_then(Value::as_f64) {
        Some(n) => Ok(n),
        None => Err(CoreError::Validation(format!("'{field}' deve ser number"))),
    }
}

/// Extract an optional string field.
///
/// `Ok(None)` when the key is absent; a present key with a non-string
/// value (including `null`) fails the type check.
pub fn optional_string(body: &Value, field: &str) -> Result<Option<String>, CoreError> {
    match body.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(CoreError::Validation(format!("'{field}' deve ser string"))),
    }
}

/// Extract an optional numeric field. Same presence rules as
/// [`optional_string`].
pub fn optional_number(body: &Value, field: &str) -> Result<Option<f64>, CoreError> {
    match body.get(field) {
        None => Ok(None),
        Some(v) => match v.as_f64() {
            Some(n) => Ok(Some(n)),
            None => Err(CoreError::Validation(format!("'{field}' deve ser number"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- required_string -----------------------------------------------------

    #[test]
    fn required_string_accepts_a_string() {
        let body = json!({ "id": "v1" });
        assert_eq!(required_string(&body, "id").unwrap(), "v1");
    }

    #[test]
    fn required_string_rejects_a_number() {
        let body = json!({ "id": 42 });
        let err = required_string(&body, "id").unwrap_err();
        assert_eq!(err.message(), "'id' deve ser string");
    }

    #[test]
    fn required_string_rejects_an_absent_field() {
        let body = json!({});
        let err = required_string(&body, "titulo").unwrap_err();
        assert_eq!(err.message(), "'titulo' deve ser string");
    }

    #[test]
    fn required_string_rejects_null() {
        let body = json!({ "id": null });
        assert!(required_string(&body, "id").is_err());
    }

    // -- required_number -----------------------------------------------------

    #[test]
    fn required_number_accepts_integers_and_floats() {
        assert_eq!(required_number(&json!({ "duracao": 120 }), "duracao").unwrap(), 120.0);
        assert_eq!(required_number(&json!({ "duracao": 1.5 }), "duracao").unwrap(), 1.5);
    }

    #[test]
    fn required_number_rejects_a_string() {
        let err = required_number(&json!({ "duracao": "120" }), "duracao").unwrap_err();
        assert_eq!(err.message(), "'duracao' deve ser number");
    }

    // -- optional fields -----------------------------------------------------

    #[test]
    fn optional_string_is_none_when_absent() {
        assert_eq!(optional_string(&json!({}), "newId").unwrap(), None);
    }

    #[test]
    fn optional_string_rejects_a_present_null() {
        // JSON null is "present with the wrong type", not "absent".
        let err = optional_string(&json!({ "newId": null }), "newId").unwrap_err();
        assert_eq!(err.message(), "'newId' deve ser string");
    }

    #[test]
    fn optional_number_passes_zero_through() {
        // Zero is valid input here; the falsy-skip rule is applied by the
        // handler, not the validator.
        assert_eq!(
            optional_number(&json!({ "newDuracao": 0 }), "newDuracao").unwrap(),
            Some(0.0)
        );
    }

    #[test]
    fn optional_number_rejects_a_string() {
        let err = optional_number(&json!({ "newDuracao": "10" }), "newDuracao").unwrap_err();
        assert_eq!(err.message(), "'newDuracao' deve ser number");
    }
}
