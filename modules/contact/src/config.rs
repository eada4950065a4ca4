//! Contact module configuration.

use secrecy::SecretString;
use serde::Deserialize;

/// Contact module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Maximum submissions per caller address per window.
    pub rate_limit_max_requests: usize,
    /// Rolling rate-limit window in seconds.
    pub rate_limit_window_secs: u64,
    /// Notification email settings.
    pub email: EmailConfig,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            rate_limit_max_requests: 5,
            rate_limit_window_secs: 15 * 60,
            email: EmailConfig::default(),
        }
    }
}

/// Settings for the outbound notification email.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailConfig {
    /// Sender address registered with the email provider.
    pub from: String,
    /// Operator address that receives contact notifications.
    pub to: String,
    /// Email provider API key.
    pub api_key: SecretString,
    /// Email provider endpoint; overridable for tests.
    pub api_base: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from: "noreply@localhost".to_owned(),
            to: "owner@localhost".to_owned(),
            api_key: SecretString::from(String::new()),
            api_base: "https://api.resend.com".to_owned(),
        }
    }
}
