//! Authentication configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted session lifetime (one year)
pub const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Login session and password settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Name of the cookie carrying the session token
    #[serde(default = "default_session_cookie_name")]
    pub session_cookie_name: String,

    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Shortest password accepted at sign-up
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl AuthConfig {
    /// Get session TTL as Duration
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name_ok = !self.session_cookie_name.is_empty()
            && self
                .session_cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !name_ok {
            return Err(ValidationError::InvalidCookieName);
        }
        if self.session_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(ValidationError::SessionTtlTooLarge);
        }
        if self.min_password_length == 0 || self.min_password_length > 128 {
            return Err(ValidationError::InvalidPasswordLength);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: default_session_cookie_name(),
            session_ttl_secs: default_session_ttl(),
            min_password_length: default_min_password_length(),
        }
    }
}

fn default_session_cookie_name() -> String {
    "sessionid".to_string()
}

fn default_session_ttl() -> u64 {
    // Two weeks
    14 * 24 * 60 * 60
}

fn default_min_password_length() -> usize {
    8
}
