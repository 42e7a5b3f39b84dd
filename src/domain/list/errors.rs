//! List-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ListId};

/// Errors raised by list and item operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// List was not found.
    NotFound(ListId),
    /// User may not see or change this list.
    Forbidden,
    /// Submitted data failed validation.
    ValidationFailed { field: String, message: String },
    /// The list already has an item with this text.
    DuplicateItem,
    /// Nobody is registered under the email a list was shared with.
    ShareeNotFound(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ListError {
    pub fn not_found(id: ListId) -> Self {
        ListError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        ListError::Forbidden
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ListError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ListError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ListError::NotFound(_) => ErrorCode::ListNotFound,
            ListError::Forbidden => ErrorCode::Forbidden,
            ListError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ListError::DuplicateItem => ErrorCode::DuplicateItem,
            ListError::ShareeNotFound(_) => ErrorCode::UserNotFound,
            ListError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ListError::NotFound(id) => format!("List not found: {}", id),
            ListError::Forbidden => "Permission denied".to_string(),
            ListError::ValidationFailed { message, .. } => message.clone(),
            ListError::DuplicateItem => super::DUPLICATE_ITEM_ERROR.to_string(),
            ListError::ShareeNotFound(email) => {
                format!("No user is registered with the email {}", email)
            }
            ListError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ListError {}

impl From<DomainError> for ListError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden | ErrorCode::Unauthorized => ListError::Forbidden,
            ErrorCode::DuplicateItem => ListError::DuplicateItem,
            ErrorCode::ValidationFailed => ListError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::ListNotFound => match err.list_id() {
                Some(id) => ListError::NotFound(id),
                None => ListError::Infrastructure(err.to_string()),
            },
            ErrorCode::UserNotFound => match err.details.get("email") {
                Some(email) => ListError::ShareeNotFound(email.clone()),
                None => ListError::Infrastructure(err.to_string()),
            },
            _ => ListError::Infrastructure(err.to_string()),
        }
    }
}
