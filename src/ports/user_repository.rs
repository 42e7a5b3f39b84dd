//! User repository port.
//!
//! Persists and looks up registered users. Email is the natural key:
//! implementations must reject a second user with the same email.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{Email, User};

/// Repository port for User persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user.
    ///
    /// # Errors
    ///
    /// - `EmailTaken` if a user with the same email exists
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Fetch several users at once. Unknown IDs are skipped; order is
    /// unspecified.
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError>;
}
