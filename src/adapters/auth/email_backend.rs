//! Email + password authentication backend.
//!
//! Looks the user up by email instead of a username, then checks the
//! password against the stored hash.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::AuthError;
use crate::domain::user::{Email, HashedPassword, User};
use crate::ports::{AuthenticationBackend, Credentials, PasswordHasher, UserRepository};

/// The application's only `AuthenticationBackend`.
pub struct EmailAuthenticationBackend {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl EmailAuthenticationBackend {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    async fn verify(
        &self,
        password: SecretString,
        hash: HashedPassword,
    ) -> Result<bool, AuthError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::service_unavailable(format!("hashing task failed: {}", e)))?
            .map_err(|e| AuthError::service_unavailable(e.to_string()))
    }
}

#[async_trait]
impl AuthenticationBackend for EmailAuthenticationBackend {
    async fn authenticate(&self, credentials: Credentials) -> Result<User, AuthError> {
        // A malformed address cannot belong to anyone.
        let user = match Email::parse(&credentials.email) {
            Ok(email) => self
                .users
                .find_by_email(&email)
                .await
                .map_err(|e| AuthError::service_unavailable(e.to_string()))?,
            Err(_) => None,
        };

        match user {
            Some(user) => {
                if self
                    .verify(credentials.password, user.password_hash().clone())
                    .await?
                {
                    Ok(user)
                } else {
                    tracing::debug!(user_id = %user.id(), "password mismatch");
                    Err(AuthError::InvalidCredentials)
                }
            }
            None => {
                // Unknown and known emails must take the same time to refuse.
                let _ = self
                    .verify(credentials.password, self.hasher.dummy_hash())
                    .await;
                Err(AuthError::UserNotFound)
            }
        }
    }
}
