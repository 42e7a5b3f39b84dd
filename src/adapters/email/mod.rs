//! Email adapters.
//!
//! - `ResendEmailSender` - Delivers through the Resend API
//! - `TracingEmailSender` - Logs and records messages without delivering

mod resend;
mod tracing_sender;

pub use resend::ResendEmailSender;
pub use tracing_sender::TracingEmailSender;
