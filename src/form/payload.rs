//! Payload validation
//!
//! The input text is sent to the endpoint verbatim, so validation only
//! gates dispatch: the text must parse as JSON and carry an array-typed
//! `"data"` field. The parsed document is returned for callers that want
//! to inspect it, but the request body is always the original text.

use serde_json::Value;

use crate::form::error::SubmitError;

/// Message shown when the document parses but lacks an array-typed "data"
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid JSON. Must contain \"data\": [ ... ]";

/// Validate the input text as a submittable payload.
///
/// Returns the parsed document on success. Fails with
/// [`SubmitError::Validation`] when the text is not valid JSON or when the
/// parsed document has no array under the `"data"` key.
pub fn validate_payload(text: &str) -> Result<Value, SubmitError> {
    let parsed: Value = serde_json::from_str(text)
        .map_err(|e| SubmitError::validation(format!("Invalid JSON: {e}")))?;

    match parsed.get("data") {
        Some(Value::Array(_)) => Ok(parsed),
        _ => Err(SubmitError::validation(INVALID_PAYLOAD_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_payload_should_accept_data_array() {
        let result = validate_payload(r#"{"data":["X","10","34","4","I"]}"#);

        let parsed = result.unwrap();
        assert_eq!(parsed["data"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn validate_payload_should_accept_empty_data_array() {
        assert!(validate_payload(r#"{"data":[]}"#).is_ok());
    }

    #[test]
    fn validate_payload_should_preserve_extra_fields() {
        let parsed = validate_payload(r#"{"data":["1"],"roll_number":"2237505"}"#).unwrap();
        assert_eq!(parsed["roll_number"], "2237505");
    }

    #[test]
    fn validate_payload_should_reject_malformed_json() {
        let result = validate_payload(r#"{"data":["X""#);

        let err = result.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("Invalid JSON:"));
    }

    #[test]
    fn validate_payload_should_reject_missing_data_field() {
        let err = validate_payload(r#"{"values":["X"]}"#).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), INVALID_PAYLOAD_MESSAGE);
    }

    #[test]
    fn validate_payload_should_reject_non_array_data() {
        let err = validate_payload(r#"{"data":"X"}"#).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), INVALID_PAYLOAD_MESSAGE);
    }

    #[test]
    fn validate_payload_should_reject_non_object_document() {
        // A bare array parses but has no "data" key to look up
        let err = validate_payload(r#"["X","10"]"#).unwrap_err();
        assert!(err.is_validation());

        let err = validate_payload("42").unwrap_err();
        assert!(err.is_validation());
    }
}
