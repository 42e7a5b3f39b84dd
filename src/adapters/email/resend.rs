//! Resend email adapter.
//!
//! Implements `EmailSender` against the Resend HTTP API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{EmailSender, OutboundEmail};

const RESEND_API_BASE_URL: &str = "https://api.resend.com";

/// Resend email sender.
pub struct ResendEmailSender {
    api_key: SecretString,
    from: String,
    api_base_url: String,
    http_client: reqwest::Client,
}

impl ResendEmailSender {
    /// Create a sender using `from` (e.g. `"Supertodolists <noreply@example.com>"`).
    pub fn new(api_key: SecretString, from: impl Into<String>) -> Self {
        Self {
            api_key,
            from: from.into(),
            api_base_url: RESEND_API_BASE_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Point the sender at another API host.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    fn request_body<'a>(&'a self, email: &'a OutboundEmail) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: &self.from,
            to: vec![email.to.as_str()],
            subject: &email.subject,
            text: &email.text_body,
        }
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DomainError> {
        let url = format!("{}/emails", self.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.request_body(email))
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to reach Resend: {}", e),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(%status, error = %error_text, "Resend send failed");
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Resend API error ({}): {}", status, error_text),
            ));
        }

        tracing::debug!(to = %email.to, subject = %email.subject, "email sent");
        Ok(())
    }
}
