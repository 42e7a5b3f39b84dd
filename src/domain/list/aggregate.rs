//! List aggregate.
//!
//! A list is a container of items, optionally owned by a user and optionally
//! shared with other users.
//!
//! # Ownership
//!
//! Lists reference their owner and sharees by `UserId`; items point back to
//! their list by `ListId`. Items are stored by the `ItemRepository` and
//! loaded alongside the list when a name or contents are needed.

use crate::domain::foundation::{DomainError, ErrorCode, ListId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

use super::Item;

/// List aggregate.
///
/// # Invariants
///
/// - `owner` is optional; anonymous lists are readable by anyone
/// - `shared_with` never contains `owner`
/// - `shared_with` contains no duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    id: ListId,
    owner: Option<UserId>,
    shared_with: Vec<UserId>,
    created_at: Timestamp,
}

impl List {
    /// Create an empty list.
    pub fn new(owner: Option<UserId>) -> Self {
        Self {
            id: ListId::new(),
            owner,
            shared_with: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Create a list together with its first item.
    ///
    /// The pair is validated here; persisting both in one transaction is the
    /// `ListRepository::create_with_first_item` contract.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the first item's text is blank
    pub fn create_new(
        first_item_text: impl Into<String>,
        owner: Option<UserId>,
    ) -> Result<(List, Item), DomainError> {
        let list = List::new(owner);
        let item = Item::new(Some(list.id), first_item_text);
        item.full_clean(&[])?;
        Ok((list, item))
    }

    /// Reconstitute a list from persistence (no validation).
    ///
    /// The owner is dropped from `shared_with` should storage ever hold it.
    pub fn reconstitute(
        id: ListId,
        owner: Option<UserId>,
        shared_with: Vec<UserId>,
        created_at: Timestamp,
    ) -> Self {
        let mut list = Self {
            id,
            owner,
            shared_with: Vec::with_capacity(shared_with.len()),
            created_at,
        };
        for user in shared_with {
            list.share_with(user);
        }
        list
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ListId {
        &self.id
    }

    pub fn owner(&self) -> Option<&UserId> {
        self.owner.as_ref()
    }

    /// Users this list is shared with, in the order they were added.
    pub fn shared_with(&self) -> &[UserId] {
        &self.shared_with
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Canonical URL of the list page.
    pub fn absolute_url(&self) -> String {
        format!("/lists/{}/", self.id)
    }

    /// The list's display name: the text of its first item.
    ///
    /// `items` must be this list's items in creation order.
    pub fn name<'a>(&self, items: &'a [Item]) -> Option<&'a str> {
        items.first().map(Item::text)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user owns this list.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner.as_ref() == Some(user_id)
    }

    /// Checks if the given user is a sharee.
    pub fn is_shared_with(&self, user_id: &UserId) -> bool {
        self.shared_with.contains(user_id)
    }

    /// Anonymous lists are open to everyone; owned lists to the owner and
    /// sharees.
    pub fn can_access(&self, user_id: Option<&UserId>) -> bool {
        match (&self.owner, user_id) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(_), Some(user)) => self.is_owner(user) || self.is_shared_with(user),
        }
    }

    /// Validates that the user can read and modify this list.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the list is private to other users
    pub fn authorize(&self, user_id: Option<&UserId>) -> Result<(), DomainError> {
        if self.can_access(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User is not authorized to access this list",
            ))
        }
    }

    /// Validates that the user owns this list.
    ///
    /// # Errors
    ///
    /// - `Forbidden` unless `user_id` is the owner
    pub fn authorize_owner(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "Only the owner can do this",
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Share the list with another user.
    ///
    /// Returns `false` when nothing changed: the user is the owner or is
    /// already a sharee.
    pub fn share_with(&mut self, user_id: UserId) -> bool {
        if self.is_owner(&user_id) || self.shared_with.contains(&user_id) {
            return false;
        }
        self.shared_with.push(user_id);
        true
    }
}
