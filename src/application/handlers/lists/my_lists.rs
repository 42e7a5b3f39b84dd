//! MyListsHandler - Query handler for a user's overview page.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, UserId};
use crate::domain::list::ListError;
use crate::domain::user::Email;
use crate::ports::{ListReader, ListSummary, UserRepository};

/// Query for the lists of the user registered under `email`.
#[derive(Debug, Clone)]
pub struct MyListsQuery {
    /// Email from the URL.
    pub email: String,
    /// The logged-in user; must be the same person.
    pub viewer: AuthenticatedUser,
}

/// A list someone else shared with the viewer.
#[derive(Debug, Clone)]
pub struct SharedListSummary {
    pub summary: ListSummary,
    pub owner_email: Option<String>,
}

/// The "my lists" page.
#[derive(Debug, Clone)]
pub struct MyLists {
    pub email: String,
    pub owned: Vec<ListSummary>,
    pub shared: Vec<SharedListSummary>,
}

/// Handler for the "my lists" page.
pub struct MyListsHandler {
    reader: Arc<dyn ListReader>,
    users: Arc<dyn UserRepository>,
}

impl MyListsHandler {
    pub fn new(reader: Arc<dyn ListReader>, users: Arc<dyn UserRepository>) -> Self {
        Self { reader, users }
    }

    pub async fn handle(&self, query: MyListsQuery) -> Result<MyLists, ListError> {
        // Compare normalized addresses; a malformed one can't be the viewer's.
        let requested = Email::parse(&query.email).map_err(|_| ListError::forbidden())?;
        if requested.as_str() != query.viewer.email {
            return Err(ListError::forbidden());
        }

        let owned = self.reader.owned_by(&query.viewer.id).await?;
        let shared = self.reader.shared_with(&query.viewer.id).await?;

        let owner_ids: Vec<UserId> = shared.iter().filter_map(|s| s.owner).collect();
        let owner_emails: HashMap<UserId, String> = self
            .users
            .find_by_ids(&owner_ids)
            .await?
            .into_iter()
            .map(|u| (*u.id(), u.email().to_string()))
            .collect();

        let shared = shared
            .into_iter()
            .map(|summary| SharedListSummary {
                owner_email: summary.owner.and_then(|id| owner_emails.get(&id).cloned()),
                summary,
            })
            .collect();

        Ok(MyLists {
            email: requested.as_str().to_string(),
            owned,
            shared,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryListStore, InMemoryUserRepository};
    use crate::domain::list::List;
    use crate::domain::user::{HashedPassword, User};
    use crate::ports::ListRepository;

    async fn register(users: &InMemoryUserRepository, email: &str) -> User {
        let user = User::new(Email::parse(email).unwrap(), HashedPassword::from_phc("$argon2id$x"));
        users.save(&user).await.unwrap();
        user
    }

    #[tokio::test]
    async fn splits_owned_and_shared_lists() {
        let store = Arc::new(InMemoryListStore::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let handler = MyListsHandler::new(store.clone(), users.clone());

        let edith = register(&users, "edith@example.com").await;
        let oni = register(&users, "oni@example.com").await;

        let (mine, first) = List::create_new("edith's list", Some(*edith.id())).unwrap();
        store.create_with_first_item(&mine, &first).await.unwrap();
        let (theirs, first) = List::create_new("oni's list", Some(*oni.id())).unwrap();
        store.create_with_first_item(&theirs, &first).await.unwrap();
        store.add_sharee(theirs.id(), edith.id()).await.unwrap();

        let page = handler
            .handle(MyListsQuery {
                email: "edith@example.com".to_string(),
                viewer: edith.to_authenticated(),
            })
            .await
            .unwrap();

        assert_eq!(page.owned.len(), 1);
        assert_eq!(page.owned[0].name.as_deref(), Some("edith's list"));
        assert_eq!(page.shared.len(), 1);
        assert_eq!(page.shared[0].summary.name.as_deref(), Some("oni's list"));
        assert_eq!(page.shared[0].owner_email.as_deref(), Some("oni@example.com"));
    }

    #[tokio::test]
    async fn other_users_page_is_forbidden() {
        let store = Arc::new(InMemoryListStore::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let handler = MyListsHandler::new(store, users.clone());
        let edith = register(&users, "edith@example.com").await;

        let err = handler
            .handle(MyListsQuery {
                email: "oni@example.com".to_string(),
                viewer: edith.to_authenticated(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, ListError::Forbidden);
    }

    #[tokio::test]
    async fn email_domain_case_does_not_matter() {
        let store = Arc::new(InMemoryListStore::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let handler = MyListsHandler::new(store, users.clone());
        let edith = register(&users, "edith@example.com").await;

        let page = handler
            .handle(MyListsQuery {
                email: "edith@Example.COM".to_string(),
                viewer: edith.to_authenticated(),
            })
            .await
            .unwrap();

        assert_eq!(page.email, "edith@example.com");
        assert!(page.owned.is_empty());
    }
}
