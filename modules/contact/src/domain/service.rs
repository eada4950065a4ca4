use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use webcore::rate_limit::{Decision, SlidingWindowLimiter};

use crate::config::ContactConfig;

use super::error::ContactError;
use super::mailer::{Mailer, OutboundEmail};
use super::model::{ContactInput, ContactMessage, NormalizedContact};
use super::repo::ContactRepository;
use super::rules::validate_contact;

/// Transport-level request metadata, resolved by the handler.
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    pub caller_address: String,
    pub user_agent: String,
}

/// What a successful submission produced besides the stored record.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionOutcome {
    pub email_sent: bool,
}

pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
    mailer: Arc<dyn Mailer>,
    limiter: Arc<SlidingWindowLimiter>,
    config: ContactConfig,
}

impl ContactService {
    pub fn new(
        repo: Arc<dyn ContactRepository>,
        mailer: Arc<dyn Mailer>,
        limiter: Arc<SlidingWindowLimiter>,
        config: ContactConfig,
    ) -> Self {
        Self {
            repo,
            mailer,
            limiter,
            config,
        }
    }

    /// Run the full submission pipeline.
    ///
    /// Ordering contract: the rate limiter and validator run before any side
    /// effect; an email failure is absorbed and recorded on the persisted
    /// record; only a storage failure is terminal.
    ///
    /// # Errors
    /// [`ContactError::RateLimited`] and [`ContactError::Validation`] before
    /// any side effect, [`ContactError::Persistence`] when the write fails.
    pub async fn submit(
        &self,
        ctx: &SubmissionContext,
        input: &ContactInput,
    ) -> Result<SubmissionOutcome, ContactError> {
        if self.limiter.check_and_record(&ctx.caller_address) == Decision::Limited {
            tracing::info!(address = %ctx.caller_address, "contact submission rate limited");
            return Err(ContactError::RateLimited);
        }

        let errors = validate_contact(input);
        if !errors.is_empty() {
            return Err(ContactError::Validation(errors));
        }

        let normalized = input.normalize();
        let submitted_at = Utc::now();

        let email = self.build_notification(&normalized, ctx);
        let (email_sent, email_error) = match self.mailer.send(&email).await {
            Ok(()) => {
                tracing::info!(to = %self.config.email.to, "contact notification sent");
                (true, None)
            }
            Err(error) => {
                tracing::warn!(%error, "contact notification failed, storing message anyway");
                (false, Some(error.to_string()))
            }
        };

        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: normalized.name,
            email: normalized.email,
            phone: normalized.phone,
            message: normalized.message,
            submitted_at,
            ip_address: ctx.caller_address.clone(),
            user_agent: ctx.user_agent.clone(),
            email_sent,
            email_error,
        };

        self.repo.insert(message).await.map_err(|error| {
            tracing::error!(%error, "failed to store contact message");
            ContactError::Persistence(error)
        })?;

        Ok(SubmissionOutcome { email_sent })
    }

    fn build_notification(
        &self,
        contact: &NormalizedContact,
        ctx: &SubmissionContext,
    ) -> OutboundEmail {
        let mut text = String::new();
        let _ = writeln!(text, "New Contact Form Submission");
        let _ = writeln!(text);
        let _ = writeln!(text, "Name: {}", contact.name);
        let _ = writeln!(text, "Email: {}", contact.email);
        if let Some(phone) = &contact.phone {
            let _ = writeln!(text, "Phone: {phone}");
        }
        let _ = writeln!(text);
        let _ = writeln!(text, "Message:");
        let _ = writeln!(text, "{}", contact.message);
        let _ = writeln!(text);
        let _ = writeln!(text, "---");
        let _ = writeln!(
            text,
            "Submitted: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(text, "IP Address: {}", ctx.caller_address);

        OutboundEmail {
            from: self.config.email.from.clone(),
            to: self.config.email.to.clone(),
            subject: format!("Portfolio Contact: {}", contact.name),
            text,
        }
    }
}
