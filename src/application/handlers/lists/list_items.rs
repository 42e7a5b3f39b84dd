//! ListItemsHandler - Query handler for a list's items.

use std::sync::Arc;

use crate::domain::foundation::{ListId, UserId};
use crate::domain::list::{Item, ListError};
use crate::ports::{ItemRepository, ListRepository};

/// Query for the items of a list.
#[derive(Debug, Clone)]
pub struct ListItemsQuery {
    pub list_id: ListId,
    pub user_id: Option<UserId>,
}

/// Handler returning a list's items in creation order.
pub struct ListItemsHandler {
    lists: Arc<dyn ListRepository>,
    items: Arc<dyn ItemRepository>,
}

impl ListItemsHandler {
    pub fn new(lists: Arc<dyn ListRepository>, items: Arc<dyn ItemRepository>) -> Self {
        Self { lists, items }
    }

    pub async fn handle(&self, query: ListItemsQuery) -> Result<Vec<Item>, ListError> {
        let list = self
            .lists
            .find_by_id(&query.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(query.list_id))?;
        list.authorize(query.user_id.as_ref())?;

        Ok(self.items.find_by_list(list.id()).await?)
    }
}
