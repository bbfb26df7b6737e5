use async_trait::async_trait;
use serde::Serialize;

/// Variables of the contact email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Email provider rejected the message: {0}")]
    Rejected(String),

    #[error("Email provider unavailable: {0}")]
    Unavailable(String),
}

/// One delivery attempt; no retry, no queue.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, params: &TemplateParams) -> Result<(), SendError>;
}
