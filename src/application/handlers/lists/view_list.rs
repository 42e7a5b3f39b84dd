//! ViewListHandler - Query handler for the list page.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{ListId, UserId};
use crate::domain::list::{Item, List, ListError};
use crate::ports::{ItemRepository, ListRepository, UserRepository};

/// Query for one list.
#[derive(Debug, Clone)]
pub struct ViewListQuery {
    pub list_id: ListId,
    pub user_id: Option<UserId>,
}

/// Everything the list page shows.
#[derive(Debug, Clone)]
pub struct ListDetail {
    pub list: List,
    /// Text of the first item.
    pub name: Option<String>,
    /// Creation order.
    pub items: Vec<Item>,
    pub owner_email: Option<String>,
    /// Sharee emails, in the order they were added.
    pub shared_with: Vec<String>,
}

/// Handler for viewing a list.
pub struct ViewListHandler {
    lists: Arc<dyn ListRepository>,
    items: Arc<dyn ItemRepository>,
    users: Arc<dyn UserRepository>,
}

impl ViewListHandler {
    pub fn new(
        lists: Arc<dyn ListRepository>,
        items: Arc<dyn ItemRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            lists,
            items,
            users,
        }
    }

    pub async fn handle(&self, query: ViewListQuery) -> Result<ListDetail, ListError> {
        let list = self
            .lists
            .find_by_id(&query.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(query.list_id))?;
        list.authorize(query.user_id.as_ref())?;

        let items = self.items.find_by_list(list.id()).await?;

        // One lookup for owner and sharees together.
        let mut ids: Vec<UserId> = list.shared_with().to_vec();
        ids.extend(list.owner().copied());
        let emails: HashMap<UserId, String> = self
            .users
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|u| (*u.id(), u.email().to_string()))
            .collect();

        let owner_email = list.owner().and_then(|id| emails.get(id).cloned());
        let shared_with = list
            .shared_with()
            .iter()
            .filter_map(|id| emails.get(id).cloned())
            .collect();

        Ok(ListDetail {
            name: list.name(&items).map(str::to_string),
            list,
            items,
            owner_email,
            shared_with,
        })
    }
}
