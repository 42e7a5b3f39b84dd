//! Authentication backend port.
//!
//! Turns login credentials into a `User`. The HTTP layer never checks
//! passwords itself; it asks the backend and then opens a session through
//! `SessionStore`.
//!
//! # Example
//!
//! ```ignore
//! let user = backend
//!     .authenticate(Credentials::new("edith@example.com", password))
//!     .await?;
//! let token = sessions.create(&user.to_authenticated()).await?;
//! ```

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::AuthError;
use crate::domain::user::User;

/// Login credentials as submitted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

/// Verifies credentials.
///
/// # Contract
///
/// Implementations must:
/// - Return the user if the credentials match
/// - Return `AuthError::UserNotFound` if nobody has this email
/// - Return `AuthError::InvalidCredentials` on a wrong password
/// - Return `AuthError::ServiceUnavailable` for storage or hashing failures
#[async_trait]
pub trait AuthenticationBackend: Send + Sync {
    async fn authenticate(&self, credentials: Credentials) -> Result<User, AuthError>;
}
