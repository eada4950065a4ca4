//! Resend HTTP delivery adapter.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::domain::mailer::{Mailer, MailerError, OutboundEmail};

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

pub struct ResendMailer {
    http: reqwest::Client,
    api_key: SecretString,
    endpoint: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            endpoint: format!("{}/emails", config.api_base.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&SendRequest {
                from: &email.from,
                to: &email.to,
                subject: &email.subject,
                text: &email.text,
            })
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(MailerError::Provider(format!("{status}: {body}")))
    }
}
