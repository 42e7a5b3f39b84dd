//! Email sender that only logs.
//!
//! Wired in when `email.enabled` is false, and handy in tests: every message
//! is recorded so assertions can inspect it.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{EmailSender, OutboundEmail};

/// Logs each email at `info` instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct TracingEmailSender {
    sent: Arc<RwLock<Vec<OutboundEmail>>>,
}

impl TracingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages "sent" so far, oldest first.
    pub async fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl EmailSender for TracingEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DomainError> {
        tracing::info!(to = %email.to, subject = %email.subject, "email not delivered (sending disabled)");
        self.sent.write().await.push(email.clone());
        Ok(())
    }
}
