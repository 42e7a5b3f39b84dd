//! Response bodies shared by every HTTP module.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════
// Error responses
// ════════════════════════════════════════════════════════════════════════════

/// Standard error response for JSON endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            code: "FORBIDDEN".to_string(),
            message: message.into(),
        }
    }

    /// The detail stays in the log; clients get a generic message.
    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "Something went wrong. Please try again later.".to_string(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Form responses
// ════════════════════════════════════════════════════════════════════════════

/// A rendered form: the submitted values (secrets omitted) and errors per field.
///
/// Errors that belong to no single field are kept under `__all__`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormResponse {
    pub form: String,
    pub values: BTreeMap<String, String>,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl FormResponse {
    pub const NON_FIELD: &'static str = "__all__";

    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn with_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_not_found_names_resource() {
        let error = ErrorResponse::not_found("List", "abc-123");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("List"));
        assert!(error.message.contains("abc-123"));
    }

    #[test]
    fn internal_error_hides_details() {
        let error = ErrorResponse::internal();
        assert_eq!(error.code, "INTERNAL_ERROR");
        assert!(!error.message.contains("Error:"));
    }

    #[test]
    fn form_errors_accumulate_per_field() {
        let form = FormResponse::new("signup")
            .with_value("email", "a@b.com")
            .with_error("password", "too short")
            .with_error("password", "too common");

        assert!(!form.is_valid());
        assert_eq!(form.errors["password"].len(), 2);
        assert_eq!(form.values["email"], "a@b.com");
    }

    #[test]
    fn empty_form_is_valid() {
        let json = serde_json::to_value(FormResponse::new("login")).unwrap();
        assert_eq!(json["form"], "login");
        assert_eq!(json["errors"], serde_json::json!({}));
    }
}
