use std::fmt;
use std::sync::Arc;

use tracing::{error, info};

use crate::modules::contact::application::ports::outgoing::{
    EmailSender, SendError, TemplateParams,
};
use crate::modules::contact::domain::ContactForm;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] FieldErrors),

    #[error("Message could not be sent: {0}")]
    Delivery(#[from] SendError),
}

#[derive(Clone)]
pub struct ContactService {
    sender: Arc<dyn EmailSender>,
    recipient_name: String,
}

impl fmt::Debug for ContactService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactService")
            .field("sender", &"<dyn EmailSender>")
            .field("recipient_name", &self.recipient_name)
            .finish()
    }
}

impl ContactService {
    pub fn new(sender: Arc<dyn EmailSender>, recipient_name: impl Into<String>) -> Self {
        Self {
            sender,
            recipient_name: recipient_name.into(),
        }
    }

    /// Validates the form and makes a single delivery attempt.
    pub async fn submit(&self, form: ContactForm) -> Result<(), ContactError> {
        let message = form.validate()?;

        let params = TemplateParams {
            from_name: message.name,
            from_email: message.email,
            message: message.message,
            to_name: self.recipient_name.clone(),
        };

        match self.sender.send(&params).await {
            Ok(()) => {
                info!(from = %params.from_email, "Contact message sent");
                Ok(())
            }
            Err(e) => {
                error!(from = %params.from_email, error = %e, "Contact message failed");
                Err(e.into())
            }
        }
    }
}
