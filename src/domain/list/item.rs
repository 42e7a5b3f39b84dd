//! Item entity - a single to-do entry.

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, ItemId, ListId, Timestamp};
use serde::{Deserialize, Serialize};

/// Message shown when an item is submitted without text.
pub const EMPTY_ITEM_ERROR: &str = "You can't have an empty list item";

/// Message shown when a list already holds an item with the same text.
pub const DUPLICATE_ITEM_ERROR: &str = "You've already got this in your list";

/// A to-do entry.
///
/// # Invariants
///
/// - `text` is non-blank once validated
/// - `(list_id, text)` is unique among items of the same list
///
/// Items are built as drafts with [`Item::new`] and must pass
/// [`Item::full_clean`] before they are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    list_id: Option<ListId>,
    text: String,
    created_at: Timestamp,
}

impl Item {
    /// Create an unvalidated item draft.
    pub fn new(list_id: Option<ListId>, text: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            list_id,
            text: text.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute an item from persistence (no validation).
    pub fn reconstitute(
        id: ItemId,
        list_id: Option<ListId>,
        text: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            list_id,
            text,
            created_at,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn list_id(&self) -> Option<&ListId> {
        self.list_id.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Field-level validation.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` on field `text` if the text is blank
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.text.trim().is_empty() {
            return Err(DomainError::validation("text", EMPTY_ITEM_ERROR));
        }
        Ok(())
    }

    /// Full validation against the items already stored in the same list.
    ///
    /// `existing` may contain items from other lists; only those sharing this
    /// item's list take part in the uniqueness check. An item without a list
    /// never conflicts.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the text is blank
    /// - `DuplicateItem` if another item in the list has the same text
    pub fn full_clean(&self, existing: &[Item]) -> Result<(), DomainError> {
        self.validate()?;

        let Some(list_id) = self.list_id else {
            return Ok(());
        };

        let duplicate = existing.iter().any(|other| {
            other.id != self.id && other.list_id == Some(list_id) && other.text == self.text
        });

        if duplicate {
            return Err(DomainError::new(ErrorCode::DuplicateItem, DUPLICATE_ITEM_ERROR)
                .with_detail("field", "text"));
        }
        Ok(())
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new(None, String::new())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
