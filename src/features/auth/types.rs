//! Request and response types for the form submission contract. The response
//! envelope mirrors the backend's form-validation error format: a failure maps
//! field names (or the `__all__` sentinel) to ordered lists of error strings,
//! and the keys are not guaranteed to match any rendered input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel field name meaning "error applies to the whole form".
pub(crate) const ALL_FIELDS: &str = "__all__";

/// Field name to ordered error strings, as returned by the backend.
pub(crate) type FieldErrorMap = BTreeMap<String, Vec<String>>;

/// JSON envelope returned by both submission endpoints.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(default)]
    pub message: Option<FieldErrorMap>,
}

/// Login form payload, URL-encoded into the request body.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Registration form payload, URL-encoded into the request body.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct RegisterFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_conditions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_envelope_deserializes_field_and_sentinel_errors() {
        let json = r#"{
            "success": false,
            "message": {
                "email": ["Account with this email does not exist"],
                "__all__": ["Invalid credentials", "Account is inactive"]
            }
        }"#;

        let response: SubmitResponse = serde_json::from_str(json).expect("valid envelope");
        assert!(!response.success);
        assert!(response.dashboard_url.is_none());
        let message = response.message.expect("failure carries a message map");
        assert_eq!(message["email"], vec!["Account with this email does not exist"]);
        assert_eq!(message[ALL_FIELDS].len(), 2);
    }

    #[test]
    fn success_envelope_tolerates_missing_optional_fields() {
        let response: SubmitResponse =
            serde_json::from_str(r#"{"success": true}"#).expect("valid envelope");
        assert!(response.success);
        assert!(response.dashboard_url.is_none());
        assert!(response.message.is_none());
    }

    #[test]
    fn register_fields_encode_as_form_body() {
        let fields = RegisterFields {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: "+919876543210".to_string(),
            password: "s3cret pass".to_string(),
            confirm_password: "s3cret pass".to_string(),
            terms_conditions: true,
        };

        let body = serde_urlencoded::to_string(&fields).expect("encodable");
        assert!(body.contains("email=asha%40example.com"));
        assert!(body.contains("phone_number=%2B919876543210"));
        assert!(body.contains("terms_conditions=true"));
        // Spaces follow form encoding rules.
        assert!(body.contains("password=s3cret+pass"));
    }
}
