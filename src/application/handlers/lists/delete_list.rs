//! DeleteListHandler - Command handler for deleting a list.

use std::sync::Arc;

use crate::domain::foundation::{ListId, UserId};
use crate::domain::list::ListError;
use crate::ports::ListRepository;

/// Command to delete a list and all of its items.
#[derive(Debug, Clone)]
pub struct DeleteListCommand {
    pub list_id: ListId,
    pub user_id: UserId,
}

/// Handler for deleting lists. Only owners may delete.
pub struct DeleteListHandler {
    lists: Arc<dyn ListRepository>,
}

impl DeleteListHandler {
    pub fn new(lists: Arc<dyn ListRepository>) -> Self {
        Self { lists }
    }

    pub async fn handle(&self, cmd: DeleteListCommand) -> Result<(), ListError> {
        let list = self
            .lists
            .find_by_id(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;
        list.authorize_owner(&cmd.user_id)?;

        self.lists.delete(list.id()).await?;
        tracing::info!(list_id = %list.id(), "list deleted");

        Ok(())
    }
}
