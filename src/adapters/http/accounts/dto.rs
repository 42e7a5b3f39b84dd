//! Form bodies for account endpoints.

use secrecy::SecretString;
use serde::Deserialize;

use crate::adapters::http::dto::FormResponse;
use crate::application::handlers::{LoginCommand, SignupCommand};

/// Sign-up form. Missing fields arrive as empty strings and fail validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl SignupForm {
    /// The form as shown back to the user; passwords are never echoed.
    pub fn rendered(&self) -> FormResponse {
        FormResponse::new("signup").with_value("email", self.email.clone())
    }
}

impl From<SignupForm> for SignupCommand {
    fn from(form: SignupForm) -> Self {
        Self {
            email: form.email,
            password: SecretString::new(form.password),
            password_confirmation: SecretString::new(form.password_confirmation),
        }
    }
}

/// Login form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn rendered(&self) -> FormResponse {
        FormResponse::new("login").with_value("email", self.email.clone())
    }
}

impl From<LoginForm> for LoginCommand {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email,
            password: SecretString::new(form.password),
        }
    }
}
