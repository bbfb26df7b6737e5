use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use crate::modules::contact::adapter::outgoing::{EmailJsSender, SmtpEmailSender};
use crate::modules::contact::application::ports::outgoing::EmailSender;
use crate::shared::config::{optional, or_default, required, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTransport {
    EmailJs,
    Smtp,
}

impl FromStr for ContactTransport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emailjs" => Ok(Self::EmailJs),
            "smtp" => Ok(Self::Smtp),
            other => Err(ConfigError::Invalid {
                key: "CONTACT_TRANSPORT",
                reason: format!("expected emailjs or smtp, got {:?}", other),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub enum TransportSettings {
    EmailJs {
        service_id: String,
        template_id: String,
        public_key: String,
    },
    Smtp {
        server: String,
        username: String,
        password: String,
        from_email: String,
        to_email: String,
    },
    /// Plain relay without auth (Mailpit and friends).
    SmtpLocal {
        host: String,
        port: u16,
        from_email: String,
        to_email: String,
    },
}

#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Shown as `to_name` in the template.
    pub recipient_name: String,
    pub transport: TransportSettings,
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let recipient_name = or_default("CONTACT_RECIPIENT_NAME", "Portfolio owner");
        let transport: ContactTransport = or_default("CONTACT_TRANSPORT", "emailjs").parse()?;

        let transport = match transport {
            ContactTransport::EmailJs => TransportSettings::EmailJs {
                service_id: required("EMAILJS_SERVICE_ID")?,
                template_id: required("EMAILJS_TEMPLATE_ID")?,
                public_key: required("EMAILJS_PUBLIC_KEY")?,
            },
            ContactTransport::Smtp => {
                let from_email = required("EMAIL_FROM")?;
                let to_email = required("CONTACT_RECIPIENT_EMAIL")?;
                match optional("SMTP_SERVER") {
                    Some(server) => TransportSettings::Smtp {
                        server,
                        username: required("SMTP_USERNAME")?,
                        password: required("SMTP_PASSWORD")?,
                        from_email,
                        to_email,
                    },
                    None => TransportSettings::SmtpLocal {
                        host: or_default("SMTP_HOST", "localhost"),
                        port: or_default("SMTP_PORT", "1025").parse::<u16>().map_err(|e| {
                            ConfigError::Invalid {
                                key: "SMTP_PORT",
                                reason: e.to_string(),
                            }
                        })?,
                        from_email,
                        to_email,
                    },
                }
            }
        };

        Ok(Self {
            recipient_name,
            transport,
        })
    }

    pub fn build_sender(&self, http: reqwest::Client) -> Result<Arc<dyn EmailSender>, ConfigError> {
        let sender: Arc<dyn EmailSender> = match &self.transport {
            TransportSettings::EmailJs {
                service_id,
                template_id,
                public_key,
            } => {
                info!("Contact messages go through EmailJS");
                Arc::new(EmailJsSender::new(http, service_id, template_id, public_key))
            }
            TransportSettings::Smtp {
                server,
                username,
                password,
                from_email,
                to_email,
            } => {
                info!(server = %server, "Contact messages go through SMTP");
                let sender = SmtpEmailSender::new(server, username, password, from_email, to_email)
                    .map_err(|e| ConfigError::Invalid {
                        key: "SMTP_SERVER",
                        reason: e.to_string(),
                    })?;
                Arc::new(sender)
            }
            TransportSettings::SmtpLocal {
                host,
                port,
                from_email,
                to_email,
            } => {
                info!(host = %host, port, "Contact messages go through local SMTP");
                Arc::new(SmtpEmailSender::new_local(host, *port, from_email, to_email))
            }
        };
        Ok(sender)
    }
}
