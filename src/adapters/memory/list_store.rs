//! In-memory list and item storage.
//!
//! One store backs `ListRepository`, `ItemRepository` and `ListReader` so
//! that cascades and the `(list, text)` constraint see a single state, the
//! way the database tables do.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ListId, UserId};
use crate::domain::list::{Item, List, DUPLICATE_ITEM_ERROR};
use crate::ports::{ItemRepository, ListReader, ListRepository, ListSummary};

#[derive(Debug, Default)]
struct State {
    /// Creation order.
    lists: Vec<List>,
    /// Creation order.
    items: Vec<Item>,
}

impl State {
    fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id() == id)
    }

    fn summary(&self, list: &List) -> ListSummary {
        let name = self
            .items
            .iter()
            .find(|i| i.list_id() == Some(list.id()))
            .map(|i| i.text().to_string());

        ListSummary {
            id: *list.id(),
            name,
            owner: list.owner().copied(),
            created_at: *list.created_at(),
        }
    }
}

/// In-memory storage for lists and their items
#[derive(Debug, Clone, Default)]
pub struct InMemoryListStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored lists
    pub async fn list_count(&self) -> usize {
        self.state.read().await.lists.len()
    }

    /// Get the number of stored items, across all lists
    pub async fn item_count(&self) -> usize {
        self.state.read().await.items.len()
    }
}

#[async_trait]
impl ListRepository for InMemoryListStore {
    async fn create_with_first_item(
        &self,
        list: &List,
        first_item: &Item,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        if state.list(list.id()).is_some() {
            return Err(DomainError::database(format!(
                "List already exists: {}",
                list.id()
            )));
        }
        if first_item.list_id() != Some(list.id()) {
            return Err(DomainError::database(
                "First item does not belong to the new list",
            ));
        }

        state.lists.push(list.clone());
        state.items.push(first_item.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ListId) -> Result<Option<List>, DomainError> {
        Ok(self.state.read().await.list(id).cloned())
    }

    async fn add_sharee(&self, list_id: &ListId, user_id: &UserId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let list = state
            .lists
            .iter_mut()
            .find(|l| l.id() == list_id)
            .ok_or_else(|| DomainError::list_not_found(list_id))?;

        list.share_with(*user_id);
        Ok(())
    }

    async fn delete(&self, id: &ListId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.list(id).is_none() {
            return Err(DomainError::list_not_found(id));
        }

        state.lists.retain(|l| l.id() != id);
        state.items.retain(|i| i.list_id() != Some(id));
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryListStore {
    async fn save(&self, item: &Item) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        if let Some(list_id) = item.list_id() {
            if state.list(list_id).is_none() {
                return Err(DomainError::list_not_found(list_id));
            }
            let duplicate = state
                .items
                .iter()
                .any(|i| i.list_id() == Some(list_id) && i.text() == item.text());
            if duplicate {
                return Err(DomainError::new(ErrorCode::DuplicateItem, DUPLICATE_ITEM_ERROR)
                    .with_detail("field", "text"));
            }
        }

        state.items.push(item.clone());
        Ok(())
    }

    async fn find_by_list(&self, list_id: &ListId) -> Result<Vec<Item>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .filter(|i| i.list_id() == Some(list_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ListReader for InMemoryListStore {
    async fn owned_by(&self, user_id: &UserId) -> Result<Vec<ListSummary>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .lists
            .iter()
            .filter(|l| l.is_owner(user_id))
            .map(|l| state.summary(l))
            .collect())
    }

    async fn shared_with(&self, user_id: &UserId) -> Result<Vec<ListSummary>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .lists
            .iter()
            .filter(|l| l.is_shared_with(user_id))
            .map(|l| state.summary(l))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::list::ListError;

    async fn store_with_list(text: &str, owner: Option<UserId>) -> (InMemoryListStore, List) {
        let store = InMemoryListStore::new();
        let (list, item) = List::create_new(text, owner).unwrap();
        store.create_with_first_item(&list, &item).await.unwrap();
        (store, list)
    }

    #[tokio::test]
    async fn created_list_is_immediately_queryable() {
        let (store, list) = store_with_list("first", None).await;

        let found = ListRepository::find_by_id(&store, list.id()).await.unwrap();
        assert_eq!(found, Some(list.clone()));

        let items = store.find_by_list(list.id()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text(), "first");
    }

    #[tokio::test]
    async fn items_come_back_in_creation_order() {
        let (store, list) = store_with_list("i1", None).await;
        store.save(&Item::new(Some(*list.id()), "item 2")).await.unwrap();
        store.save(&Item::new(Some(*list.id()), "3")).await.unwrap();

        let texts: Vec<String> = store
            .find_by_list(list.id())
            .await
            .unwrap()
            .iter()
            .map(|i| i.text().to_string())
            .collect();
        assert_eq!(texts, vec!["i1", "item 2", "3"]);
    }

    #[tokio::test]
    async fn duplicate_text_in_same_list_is_rejected() {
        let (store, list) = store_with_list("bla", None).await;

        let err = store
            .save(&Item::new(Some(*list.id()), "bla"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateItem);
    }

    #[tokio::test]
    async fn same_text_in_other_list_is_allowed() {
        let (store, _) = store_with_list("bla", None).await;
        let (other, item) = List::create_new("something", None).unwrap();
        store.create_with_first_item(&other, &item).await.unwrap();

        store.save(&Item::new(Some(*other.id()), "bla")).await.unwrap();
    }

    #[tokio::test]
    async fn saving_into_missing_list_is_list_not_found() {
        let store = InMemoryListStore::new();
        let err = store
            .save(&Item::new(Some(ListId::new()), "orphan"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ListNotFound);
    }

    #[tokio::test]
    async fn add_sharee_ignores_owner_and_repeats() {
        let owner = UserId::new();
        let friend = UserId::new();
        let (store, list) = store_with_list("x", Some(owner)).await;

        store.add_sharee(list.id(), &owner).await.unwrap();
        store.add_sharee(list.id(), &friend).await.unwrap();
        store.add_sharee(list.id(), &friend).await.unwrap();

        let found = ListRepository::find_by_id(&store, list.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.shared_with(), &[friend]);
    }

    #[tokio::test]
    async fn add_sharee_to_missing_list_fails() {
        let store = InMemoryListStore::new();
        let missing = ListId::new();
        let err = store
            .add_sharee(&missing, &UserId::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ListNotFound);
        assert_eq!(ListError::from(err), ListError::NotFound(missing));
    }

    #[tokio::test]
    async fn delete_cascades_to_items() {
        let (store, list) = store_with_list("a", None).await;
        store.save(&Item::new(Some(*list.id()), "b")).await.unwrap();
        let (keep, keep_item) = List::create_new("keep", None).unwrap();
        store.create_with_first_item(&keep, &keep_item).await.unwrap();

        store.delete(list.id()).await.unwrap();

        assert_eq!(store.list_count().await, 1);
        assert_eq!(store.item_count().await, 1);
        assert!(store.find_by_list(list.id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_list_is_list_not_found() {
        let store = InMemoryListStore::new();
        let err = store.delete(&ListId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ListNotFound);
    }

    #[tokio::test]
    async fn reader_splits_owned_and_shared() {
        let owner = UserId::new();
        let friend = UserId::new();
        let (store, list) = store_with_list("reticulate splines", Some(owner)).await;
        store.add_sharee(list.id(), &friend).await.unwrap();

        let owned = store.owned_by(&owner).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name.as_deref(), Some("reticulate splines"));
        assert!(store.shared_with(&owner).await.unwrap().is_empty());

        let shared = store.shared_with(&friend).await.unwrap();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].owner, Some(owner));
        assert!(store.owned_by(&friend).await.unwrap().is_empty());
    }
}
