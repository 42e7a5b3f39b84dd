//! Email address value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Longest address accepted (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// A syntactically valid email address.
///
/// The domain part is lowercased on construction; the local part is kept
/// exactly as typed, since mailbox names may be case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and normalize an address.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the input is blank
    /// - `TooLong` above [`MAX_EMAIL_LENGTH`]
    /// - `InvalidFormat` unless it is `local@domain` with no whitespace
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if trimmed.len() > MAX_EMAIL_LENGTH {
            return Err(ValidationError::too_long("email", MAX_EMAIL_LENGTH));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format("email", "contains whitespace"));
        }

        let (local, domain) = match trimmed.split_once('@') {
            Some(parts) => parts,
            None => return Err(ValidationError::invalid_format("email", "missing @ symbol")),
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(ValidationError::invalid_format(
                "email",
                "expected exactly one @ between a name and a domain",
            ));
        }
        if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
            return Err(ValidationError::invalid_format("email", "malformed domain"));
        }

        Ok(Self(format!("{}@{}", local, domain.to_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
