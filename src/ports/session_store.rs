//! Login session port.
//!
//! A session maps an opaque token (held by the browser in a cookie) to a
//! user. Stores keep only the token digest, never the raw token.
//!
//! # When to Use
//!
//! - **AuthenticationBackend**: checks a password, once, at login
//! - **SessionStore**: recognises the user on every later request

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::user::SessionToken;

/// Creates, resolves and revokes login sessions.
///
/// # Contract
///
/// - `validate` returns `InvalidSession` for unknown or revoked tokens
/// - `validate` returns `SessionExpired` once the session outlived its TTL
/// - `revoke` is idempotent
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Open a session for the user and return its token.
    async fn create(&self, user: &AuthenticatedUser) -> Result<SessionToken, AuthError>;

    /// Resolve a token to the user it belongs to.
    async fn validate(&self, token: &SessionToken) -> Result<AuthenticatedUser, AuthError>;

    /// End a session.
    async fn revoke(&self, token: &SessionToken) -> Result<(), AuthError>;
}
