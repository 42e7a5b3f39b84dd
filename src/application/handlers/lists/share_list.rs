//! ShareListHandler - Command handler for sharing a list with another user.

use std::sync::Arc;

use crate::domain::foundation::{ListId, UserId};
use crate::domain::list::{List, ListError};
use crate::domain::user::Email;
use crate::ports::{ListRepository, UserRepository};

/// Command to share a list with the user registered under `sharee_email`.
#[derive(Debug, Clone)]
pub struct ShareListCommand {
    pub list_id: ListId,
    pub sharee_email: String,
    pub user_id: Option<UserId>,
}

/// Handler for sharing lists.
pub struct ShareListHandler {
    lists: Arc<dyn ListRepository>,
    users: Arc<dyn UserRepository>,
}

impl ShareListHandler {
    pub fn new(lists: Arc<dyn ListRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { lists, users }
    }

    /// Returns the list with its updated sharees.
    pub async fn handle(&self, cmd: ShareListCommand) -> Result<List, ListError> {
        let mut list = self
            .lists
            .find_by_id(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;
        list.authorize(cmd.user_id.as_ref())?;

        let email = Email::parse(&cmd.sharee_email)
            .map_err(|e| ListError::validation("sharee", e.to_string()))?;
        let sharee = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ListError::ShareeNotFound(email.to_string()))?;

        // Sharing with the owner, or twice, changes nothing.
        if list.share_with(*sharee.id()) {
            self.lists
                .add_sharee(list.id(), sharee.id())
                .await
                .map_err(|e| e.with_detail("email", email.to_string()))?;
            tracing::info!(list_id = %list.id(), sharee_id = %sharee.id(), "list shared");
        }

        Ok(list)
    }
}
