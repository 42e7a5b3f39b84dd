//! LogoutHandler - Command handler for ending a login session.

use std::sync::Arc;

use crate::domain::user::SessionToken;
use crate::ports::SessionStore;

/// Command to log out.
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    /// Token from the request, if it carried one.
    pub token: Option<SessionToken>,
}

/// Handler for logout.
///
/// Logout always succeeds from the user's point of view: a missing or
/// unknown token is fine, and store failures are only logged.
pub struct LogoutHandler {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: LogoutCommand) {
        let Some(token) = cmd.token else {
            return;
        };

        match self.sessions.revoke(&token).await {
            Ok(()) => tracing::info!("user logged out"),
            Err(e) => tracing::error!(error = %e, "failed to revoke session"),
        }
    }
}
