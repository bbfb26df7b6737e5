use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::{header::ContentType, Mailbox},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::modules::contact::application::ports::outgoing::{
    EmailSender, SendError, TemplateParams,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Delivers contact messages to the site owner's inbox over SMTP. The
/// visitor's address goes in `Reply-To`.
pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
    to_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, to_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            to_email: to_email.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
        to_email: &str,
    ) -> Result<Self, SendError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| SendError::Unavailable(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email, to_email))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str, to_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email, to_email)
    }

    fn build(&self, params: &TemplateParams) -> Result<Message, SendError> {
        let invalid = |e: lettre::address::AddressError| SendError::InvalidAddress(e.to_string());

        let from: Mailbox = self.from_email.parse().map_err(invalid)?;
        let reply_to = Mailbox::new(
            Some(params.from_name.clone()),
            params.from_email.parse().map_err(invalid)?,
        );
        let to = Mailbox::new(
            Some(params.to_name.clone()),
            self.to_email.parse().map_err(invalid)?,
        );

        Message::builder()
            .from(from)
            .reply_to(reply_to)
            .to(to)
            .subject(format!("Portfolio contact from {}", params.from_name))
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "{} <{}> wrote:\n\n{}",
                params.from_name, params.from_email, params.message
            ))
            .map_err(|e| SendError::Rejected(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, params: &TemplateParams) -> Result<(), SendError> {
        let email = self.build(params)?;
        self.mailer.send(email).await.map_err(SendError::Unavailable)
    }
}
