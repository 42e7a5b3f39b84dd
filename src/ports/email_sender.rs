//! Outbound email port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// A plain-text transactional email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
}

/// Sends transactional email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the provider rejects or cannot be reached
    async fn send(&self, email: &OutboundEmail) -> Result<(), DomainError>;
}
