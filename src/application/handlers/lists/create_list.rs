//! CreateListHandler - Command handler for starting a new list.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::list::{Item, List, ListError};
use crate::ports::ListRepository;

/// Command to create a list from its first item.
#[derive(Debug, Clone)]
pub struct CreateListCommand {
    pub first_item_text: String,
    /// Logged-in user, who becomes the owner. Anonymous lists have none.
    pub owner: Option<UserId>,
}

/// Result of successful list creation.
#[derive(Debug, Clone)]
pub struct CreateListResult {
    pub list: List,
    pub first_item: Item,
}

/// Handler for creating lists.
pub struct CreateListHandler {
    lists: Arc<dyn ListRepository>,
}

impl CreateListHandler {
    pub fn new(lists: Arc<dyn ListRepository>) -> Self {
        Self { lists }
    }

    pub async fn handle(&self, cmd: CreateListCommand) -> Result<CreateListResult, ListError> {
        // Validation happens before anything is written.
        let (list, first_item) = List::create_new(cmd.first_item_text, cmd.owner)?;

        self.lists.create_with_first_item(&list, &first_item).await?;
        tracing::info!(list_id = %list.id(), owned = list.owner().is_some(), "list created");

        Ok(CreateListResult { list, first_item })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryListStore;
    use crate::domain::list::EMPTY_ITEM_ERROR;
    use crate::ports::ItemRepository;

    fn command(text: &str, owner: Option<UserId>) -> CreateListCommand {
        CreateListCommand {
            first_item_text: text.to_string(),
            owner,
        }
    }

    #[tokio::test]
    async fn creates_list_and_first_item() {
        let store = Arc::new(InMemoryListStore::new());
        let handler = CreateListHandler::new(store.clone());

        let result = handler.handle(command("A new list item", None)).await.unwrap();

        let items = store.find_by_list(result.list.id()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text(), "A new list item");
        assert_eq!(result.first_item, items[0]);
    }

    #[tokio::test]
    async fn owner_is_attached() {
        let store = Arc::new(InMemoryListStore::new());
        let handler = CreateListHandler::new(store.clone());
        let owner = UserId::new();

        let result = handler.handle(command("x", Some(owner))).await.unwrap();

        let saved = store.find_by_id(result.list.id()).await.unwrap().unwrap();
        assert_eq!(saved.owner(), Some(&owner));
    }

    #[tokio::test]
    async fn empty_first_item_saves_nothing() {
        let store = Arc::new(InMemoryListStore::new());
        let handler = CreateListHandler::new(store.clone());

        let err = handler.handle(command("", None)).await.unwrap_err();

        assert_eq!(err, ListError::validation("text", EMPTY_ITEM_ERROR));
        assert_eq!(store.list_count().await, 0);
        assert_eq!(store.item_count().await, 0);
    }
}
