//! SignupHandler - Command handler for registering a user.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::user::{AccountError, Email, PasswordPolicy, User};
use crate::ports::{EmailSender, OutboundEmail, PasswordHasher, UserRepository};

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub email: String,
    pub password: SecretString,
    pub password_confirmation: SecretString,
}

/// Result of successful sign-up.
#[derive(Debug, Clone)]
pub struct SignupResult {
    pub user: User,
}

/// Handler for sign-up.
pub struct SignupHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    mailer: Arc<dyn EmailSender>,
    policy: PasswordPolicy,
}

impl SignupHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        mailer: Arc<dyn EmailSender>,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            users,
            hasher,
            mailer,
            policy,
        }
    }

    pub async fn handle(&self, cmd: SignupCommand) -> Result<SignupResult, AccountError> {
        // 1. Validate the form
        let email = Email::parse(&cmd.email)?;
        self.policy.check(&cmd.password, &cmd.password_confirmation)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AccountError::EmailTaken);
        }

        // 2. Hash off the async executor
        let hasher = self.hasher.clone();
        let password = cmd.password;
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::infrastructure(format!("hashing task failed: {}", e)))??;

        // 3. Persist; the repository rejects a concurrent duplicate
        let user = User::new(email, hash);
        self.users.save(&user).await?;
        tracing::info!(user_id = %user.id(), "user signed up");

        // 4. Welcome email never fails the sign-up
        if let Err(e) = self.mailer.send(&welcome_email(&user)).await {
            tracing::warn!(user_id = %user.id(), error = %e, "welcome email failed");
        }

        Ok(SignupResult { user })
    }
}

fn welcome_email(user: &User) -> OutboundEmail {
    OutboundEmail {
        to: user.email().to_string(),
        subject: "Welcome to Supertodolists".to_string(),
        text_body: format!(
            "Hi {},\n\nYour account is ready. Start a list and share it with friends.\n",
            user.email()
        ),
    }
}
