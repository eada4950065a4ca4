use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Raw contact form payload, exactly as submitted. Absent fields stay `None`
/// so validation can report them by name instead of failing at decode time.
#[derive(Debug, Clone, Default)]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// Validated and normalized form fields: everything trimmed, email lowercased.
#[derive(Debug, Clone)]
pub struct NormalizedContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactInput {
    /// Normalize the payload. Only meaningful after validation has passed;
    /// required fields collapse to empty strings otherwise.
    pub fn normalize(&self) -> NormalizedContact {
        let trimmed = |field: &Option<String>| {
            field
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .to_owned()
        };
        NormalizedContact {
            name: trimmed(&self.name),
            email: trimmed(&self.email).to_lowercase(),
            phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_owned),
            message: trimmed(&self.message),
        }
    }
}

/// A contact message as persisted. Insert-only; the system never updates or
/// deletes these records.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: String,
    pub email_sent: bool,
    pub email_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases_email() {
        let input = ContactInput {
            name: Some("  Jane Doe ".to_owned()),
            email: Some(" Jane@Example.COM ".to_owned()),
            phone: Some("   ".to_owned()),
            message: Some(" hello ".to_owned()),
        };
        let normalized = input.normalize();
        assert_eq!(normalized.name, "Jane Doe");
        assert_eq!(normalized.email, "jane@example.com");
        assert_eq!(normalized.phone, None);
        assert_eq!(normalized.message, "hello");
    }

    #[test]
    fn normalize_keeps_nonempty_phone() {
        let input = ContactInput {
            phone: Some(" +1 555 0100 ".to_owned()),
            ..ContactInput::default()
        };
        assert_eq!(input.normalize().phone.as_deref(), Some("+1 555 0100"));
    }
}
