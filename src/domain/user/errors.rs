//! Account-specific error types.

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};

/// Message shown for any refused login, whatever the reason.
pub const INVALID_LOGIN_ERROR: &str = "Please enter a correct email and password.";

/// Message shown when signing up with an address already in use.
pub const EMAIL_TAKEN_ERROR: &str = "A user with that email already exists.";

/// Errors raised by sign-up, login and logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Submitted form data failed validation.
    ValidationFailed { field: String, message: String },
    /// The email is already registered.
    EmailTaken,
    /// Unknown email or wrong password.
    InvalidCredentials,
    /// Infrastructure error.
    Infrastructure(String),
}

impl AccountError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccountError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccountError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccountError::EmailTaken => ErrorCode::EmailTaken,
            AccountError::InvalidCredentials => ErrorCode::Unauthorized,
            AccountError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AccountError::ValidationFailed { message, .. } => message.clone(),
            AccountError::EmailTaken => EMAIL_TAKEN_ERROR.to_string(),
            AccountError::InvalidCredentials => INVALID_LOGIN_ERROR.to_string(),
            AccountError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AccountError {}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::EmailTaken => AccountError::EmailTaken,
            ErrorCode::ValidationFailed => AccountError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}

impl From<AuthError> for AccountError {
    fn from(err: AuthError) -> Self {
        if err.is_bad_login() {
            AccountError::InvalidCredentials
        } else {
            AccountError::Infrastructure(err.to_string())
        }
    }
}
