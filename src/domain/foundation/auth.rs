//! Authentication types for the domain layer.
//!
//! These types describe who is making a request once a login session has been
//! resolved. They carry **no storage or transport details** - the cookie
//! middleware, the Postgres session table and the in-memory session map all
//! populate them through the `SessionStore` port.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after resolving the session cookie:
//! let user = session_store.validate(&token).await?;
//! request.extensions_mut().insert(user);
//! ```

use super::UserId;
use thiserror::Error;

/// User attached to the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The registered user's identifier.
    pub id: UserId,

    /// The email the user signs in with.
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Authentication errors.
///
/// Domain-centric: they describe what went wrong from the application's
/// perspective, not which storage backend noticed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No user is registered under the given email.
    #[error("User not found")]
    UserNotFound,

    /// The user exists but the password did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The session token is unknown or was revoked.
    #[error("Invalid session")]
    InvalidSession,

    /// The session token was valid but has expired.
    #[error("Session expired")]
    SessionExpired,

    /// Storage or hashing failed.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// True for the two ways a login attempt can be refused.
    pub fn is_bad_login(&self) -> bool {
        matches!(self, AuthError::UserNotFound | AuthError::InvalidCredentials)
    }

    /// True if the caller should be treated as anonymous.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidSession | AuthError::SessionExpired)
    }
}
