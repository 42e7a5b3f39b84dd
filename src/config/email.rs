//! Email configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Send the welcome email on sign-up
    #[serde(default)]
    pub enabled: bool,

    /// Resend API key, required when enabled
    pub resend_api_key: Option<SecretString>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.enabled {
            return Ok(());
        }
        let key = self
            .resend_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .unwrap_or_default();
        if key.is_empty() {
            return Err(ValidationError::MissingRequired("RESEND_API_KEY"));
        }
        if !key.starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@supertodolists.example.com".to_string()
}

fn default_from_name() -> String {
    "Supertodolists".to_string()
}
