//! User aggregate.
//!
//! Users are identified by email; there is no separate username.

use crate::domain::foundation::{AuthenticatedUser, Timestamp, UserId};

use super::{Email, HashedPassword};

/// A registered user.
///
/// # Invariants
///
/// - `email` is unique across users (enforced by the repository)
/// - `password_hash` is never a plain password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: HashedPassword,
    created_at: Timestamp,
}

impl User {
    /// Register a new user.
    pub fn new(email: Email, password_hash: HashedPassword) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_hash,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a user from persistence.
    pub fn reconstitute(
        id: UserId,
        email: Email,
        password_hash: HashedPassword,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Identity attached to requests once this user has logged in.
    pub fn to_authenticated(&self) -> AuthenticatedUser {
        AuthenticatedUser::new(self.id, self.email.as_str())
    }
}
