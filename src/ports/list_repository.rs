//! List repository port (write side).
//!
//! Defines the contract for persisting List aggregates and their sharing
//! relation.
//!
//! # Design
//!
//! - **Atomic creation**: a list and its first item are written together
//! - **Cascade**: deleting a list deletes its items and sharing rows
//! - **Owner never shared**: `add_sharee` must not store the owner

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ListId, UserId};
use crate::domain::list::{Item, List};

/// Repository port for List aggregate persistence.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Persist a new list and its first item in one transaction.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn create_with_first_item(&self, list: &List, first_item: &Item)
        -> Result<(), DomainError>;

    /// Find a list by ID, with its sharees loaded.
    async fn find_by_id(&self, id: &ListId) -> Result<Option<List>, DomainError>;

    /// Record that the list is shared with a user.
    ///
    /// Idempotent. Adding the list's owner is silently ignored.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if the list doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn add_sharee(&self, list_id: &ListId, user_id: &UserId) -> Result<(), DomainError>;

    /// Delete a list with all of its items.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if the list doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ListId) -> Result<(), DomainError>;
}
