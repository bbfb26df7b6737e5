use async_trait::async_trait;
use serde::Serialize;

use crate::modules::contact::application::ports::outgoing::{
    EmailSender, SendError, TemplateParams,
};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    /// The account's public key
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Sends through a hosted transactional email template.
#[derive(Clone)]
pub struct EmailJsSender {
    http: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsSender {
    pub fn new(
        http: reqwest::Client,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: EMAILJS_SEND_URL.to_string(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    /// Points the sender at another endpoint (proxy, local stub).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
        }
    }
}

#[async_trait]
impl EmailSender for EmailJsSender {
    async fn send(&self, params: &TemplateParams) -> Result<(), SendError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.request(params))
            .send()
            .await
            .map_err(|e| SendError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_server_error() {
            Err(SendError::Unavailable(format!("{}: {}", status, body)))
        } else {
            Err(SendError::Rejected(format!("{}: {}", status, body)))
        }
    }
}
