use async_trait::async_trait;
use thiserror::Error;

/// A notification email ready for handoff to the delivery provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum MailerError {
    /// The provider answered but refused the send.
    #[error("email provider rejected the request: {0}")]
    Provider(String),
    /// The provider could not be reached.
    #[error("email transport failed: {0}")]
    Transport(String),
}

/// Delivery port. Failures are absorbed by the caller, never fatal to the
/// submission flow.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError>;
}
