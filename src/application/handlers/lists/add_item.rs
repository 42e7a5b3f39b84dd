//! AddItemHandler - Command handler for appending an item to a list.

use std::sync::Arc;

use crate::domain::foundation::{ListId, UserId};
use crate::domain::list::{Item, ListError};
use crate::ports::{ItemRepository, ListRepository};

/// Command to append an item.
#[derive(Debug, Clone)]
pub struct AddItemCommand {
    pub list_id: ListId,
    pub text: String,
    pub user_id: Option<UserId>,
}

/// Handler for appending items.
pub struct AddItemHandler {
    lists: Arc<dyn ListRepository>,
    items: Arc<dyn ItemRepository>,
}

impl AddItemHandler {
    pub fn new(lists: Arc<dyn ListRepository>, items: Arc<dyn ItemRepository>) -> Self {
        Self { lists, items }
    }

    pub async fn handle(&self, cmd: AddItemCommand) -> Result<Item, ListError> {
        // 1. Load and authorize
        let list = self
            .lists
            .find_by_id(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;
        list.authorize(cmd.user_id.as_ref())?;

        // 2. Validate against the list's current items
        let existing = self.items.find_by_list(list.id()).await?;
        let item = Item::new(Some(*list.id()), cmd.text);
        item.full_clean(&existing)?;

        // 3. Persist; the store still rejects a racing duplicate
        self.items.save(&item).await?;
        tracing::debug!(list_id = %list.id(), item_id = %item.id(), "item added");

        Ok(item)
    }
}
