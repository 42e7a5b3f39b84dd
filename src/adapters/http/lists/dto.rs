//! Request and response bodies for list endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ListDetail, MyLists, SharedListSummary};
use crate::domain::list::Item;
use crate::ports::ListSummary;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Item text, for a new list or an existing one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub text: String,
}

/// Email of the user to share a list with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShareForm {
    pub sharee: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One item as the API and the list page show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: String,
    pub text: String,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().to_string(),
            text: item.text().to_string(),
        }
    }
}

/// The list page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDetailResponse {
    pub id: String,
    pub url: String,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub shared_with: Vec<String>,
    pub items: Vec<ItemResponse>,
    pub created_at: String,
}

impl From<ListDetail> for ListDetailResponse {
    fn from(detail: ListDetail) -> Self {
        Self {
            id: detail.list.id().to_string(),
            url: detail.list.absolute_url(),
            name: detail.name,
            owner: detail.owner_email,
            shared_with: detail.shared_with,
            items: detail.items.iter().map(ItemResponse::from).collect(),
            created_at: detail.list.created_at().to_rfc3339(),
        }
    }
}

/// A list on the "my lists" page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSummaryResponse {
    pub id: String,
    pub url: String,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl From<ListSummary> for ListSummaryResponse {
    fn from(summary: ListSummary) -> Self {
        Self {
            url: format!("/lists/{}/", summary.id),
            id: summary.id.to_string(),
            name: summary.name,
            owner: None,
        }
    }
}

impl From<SharedListSummary> for ListSummaryResponse {
    fn from(shared: SharedListSummary) -> Self {
        Self {
            owner: shared.owner_email,
            ..Self::from(shared.summary)
        }
    }
}

/// The "my lists" page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyListsResponse {
    pub email: String,
    pub owned: Vec<ListSummaryResponse>,
    pub shared: Vec<ListSummaryResponse>,
}

impl From<MyLists> for MyListsResponse {
    fn from(lists: MyLists) -> Self {
        Self {
            email: lists.email,
            owned: lists.owned.into_iter().map(Into::into).collect(),
            shared: lists.shared.into_iter().map(Into::into).collect(),
        }
    }
}

/// Error body of the item API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemApiError {
    pub error: String,
}
