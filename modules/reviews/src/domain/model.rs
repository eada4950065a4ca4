use chrono::{DateTime, Utc};

pub const DEFAULT_PROFESSION: &str = "Professional User";
pub const DEFAULT_RATING: i16 = 5;

/// Raw review payload, exactly as submitted. Absent fields stay `None` so
/// validation can report them by name.
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub image: Option<String>,
    pub name: Option<String>,
    pub profession: Option<String>,
    pub feedback: Option<String>,
    pub rating: Option<i64>,
}

/// A review as persisted. Exactly one per identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub user_id: String,
    pub image: String,
    pub name: String,
    pub profession: String,
    pub feedback: String,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated review fields with defaults applied, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFields {
    pub image: String,
    pub name: String,
    pub profession: String,
    pub feedback: String,
    pub rating: i16,
}

impl ReviewDraft {
    /// True when the payload carries a non-blank image value.
    pub fn has_image(&self) -> bool {
        self.image
            .as_deref()
            .map(str::trim)
            .is_some_and(|i| !i.is_empty())
    }

    /// Apply trimming and defaults. Only meaningful after validation passed.
    ///
    /// Defaults mirror the stored-schema defaults: profession falls back to
    /// [`DEFAULT_PROFESSION`], a missing image to a generated avatar URL
    /// derived from the name, a missing rating to [`DEFAULT_RATING`].
    pub fn into_fields(self) -> ReviewFields {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .to_owned();
        let image = self
            .image
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map_or_else(|| default_avatar_url(&name), str::to_owned);
        let profession = self
            .profession
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map_or_else(|| DEFAULT_PROFESSION.to_owned(), str::to_owned);
        ReviewFields {
            image,
            name,
            profession,
            feedback: self
                .feedback
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .to_owned(),
            #[allow(clippy::cast_possible_truncation)]
            rating: self.rating.unwrap_or(i64::from(DEFAULT_RATING)) as i16,
        }
    }
}

/// Fallback avatar from the external avatar service, seeded with the name.
pub fn default_avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        urlencoding::encode(name)
    )
}
