//! LoginHandler - Command handler for opening a login session.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::user::{AccountError, SessionToken};
use crate::ports::{AuthenticationBackend, Credentials, SessionStore};

const REQUIRED_FIELD: &str = "This field is required.";

/// Command to log in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: SecretString,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: AuthenticatedUser,
    /// Raw token for the session cookie. Only its digest is stored.
    pub token: SessionToken,
}

/// Handler for login.
pub struct LoginHandler {
    backend: Arc<dyn AuthenticationBackend>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(backend: Arc<dyn AuthenticationBackend>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { backend, sessions }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AccountError> {
        if cmd.email.trim().is_empty() {
            return Err(AccountError::validation("email", REQUIRED_FIELD));
        }
        if cmd.password.expose_secret().is_empty() {
            return Err(AccountError::validation("password", REQUIRED_FIELD));
        }

        let user = match self
            .backend
            .authenticate(Credentials::new(cmd.email, cmd.password))
            .await
        {
            Ok(user) => user.to_authenticated(),
            Err(e) if e.is_bad_login() => {
                tracing::info!("login refused");
                return Err(AccountError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(error = %e, "authentication backend failed");
                return Err(e.into());
            }
        };

        let token = self.sessions.create(&user).await?;
        tracing::info!(user_id = %user.id, "user logged in");

        Ok(LoginResult { user, token })
    }
}
