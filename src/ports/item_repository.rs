//! Item repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ListId};
use crate::domain::list::Item;

/// Repository port for Item persistence.
///
/// Implementations must:
/// - Enforce `(list_id, text)` uniqueness as a backstop to `Item::full_clean`
/// - Return a list's items in creation order
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Save a new item.
    ///
    /// # Errors
    ///
    /// - `DuplicateItem` if the list already has an item with this text
    /// - `DatabaseError` on persistence failure
    async fn save(&self, item: &Item) -> Result<(), DomainError>;

    /// All items of a list, oldest first.
    async fn find_by_list(&self, list_id: &ListId) -> Result<Vec<Item>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ItemRepository) {}
    }
}
