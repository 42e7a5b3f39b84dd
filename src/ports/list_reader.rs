//! List reader port (read side).
//!
//! Summaries for the "my lists" page: each list with its derived name,
//! without loading every item.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ListId, Timestamp, UserId};

/// Reader port for list overviews.
#[async_trait]
pub trait ListReader: Send + Sync {
    /// Lists owned by the user, oldest first.
    async fn owned_by(&self, user_id: &UserId) -> Result<Vec<ListSummary>, DomainError>;

    /// Lists other users have shared with the user, oldest first.
    async fn shared_with(&self, user_id: &UserId) -> Result<Vec<ListSummary>, DomainError>;
}

/// Summary view of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: ListId,

    /// Text of the first item; `None` for a list without items.
    pub name: Option<String>,

    pub owner: Option<UserId>,

    pub created_at: Timestamp,
}
