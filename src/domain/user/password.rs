//! Password values.
//!
//! Plain passwords never leave a `SecretString`; only the PHC-formatted hash
//! is stored.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::ValidationError;

/// A stored password hash in PHC string format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wrap an encoded hash produced by a `PasswordHasher`.
    pub fn from_phc(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Password rules applied at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Check a new password and its confirmation.
    ///
    /// # Errors
    ///
    /// - `EmptyField` on `password` when blank
    /// - `InvalidFormat` on `password` below `min_length`
    /// - `InvalidFormat` on `password_confirmation` when the two differ
    pub fn check(
        &self,
        password: &SecretString,
        confirmation: &SecretString,
    ) -> Result<(), ValidationError> {
        let raw = password.expose_secret();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("password"));
        }
        if raw.chars().count() < self.min_length {
            return Err(ValidationError::invalid_format(
                "password",
                format!("must contain at least {} characters", self.min_length),
            ));
        }
        if raw != confirmation.expose_secret() {
            return Err(ValidationError::invalid_format(
                "password_confirmation",
                "the two password fields didn't match",
            ));
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[test]
    fn accepts_matching_long_enough_password() {
        let policy = PasswordPolicy::default();
        assert!(policy
            .check(&secret("correct horse"), &secret("correct horse"))
            .is_ok());
    }

    #[test]
    fn rejects_empty_password() {
        let err = PasswordPolicy::default()
            .check(&secret(""), &secret(""))
            .unwrap_err();
        assert_eq!(err.field(), "password");
    }

    #[test]
    fn rejects_short_password() {
        let err = PasswordPolicy::new(10)
            .check(&secret("short"), &secret("short"))
            .unwrap_err();
        assert_eq!(err.field(), "password");
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let err = PasswordPolicy::default()
            .check(&secret("alocporra1"), &secret("alocporra2"))
            .unwrap_err();
        assert_eq!(err.field(), "password_confirmation");
    }
}
