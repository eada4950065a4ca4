//! Table-driven field validation.
//!
//! Validation rules are declared once per form as a constant table and applied
//! both at the API boundary and wherever the UI needs to mirror them, so the
//! two sides cannot drift apart. Rules are pure data plus pure functions; no
//! side effects.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Field name to human-readable message, only for failing fields. An empty
/// map means the record as a whole is valid.
pub type FieldErrors = BTreeMap<String, String>;

/// Value of a single form field, as submitted. `None` means the field was
/// absent from the payload.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Integer(Option<i64>),
}

/// Declarative validation rule for one field.
///
/// Length bounds apply to the trimmed value; numeric bounds to the raw value.
/// `shape` runs last and only on non-empty text.
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub required_message: &'static str,
    pub min_len: Option<(usize, &'static str)>,
    pub max_len: Option<(usize, &'static str)>,
    pub min: Option<(i64, &'static str)>,
    pub max: Option<(i64, &'static str)>,
    pub shape: Option<(fn(&str) -> bool, &'static str)>,
}

impl FieldRule {
    /// Optional field with no constraints; meant as a struct-update base.
    pub const fn optional(field: &'static str) -> Self {
        Self {
            field,
            required: false,
            required_message: "",
            min_len: None,
            max_len: None,
            min: None,
            max: None,
            shape: None,
        }
    }
}

/// Validate one field, returning the first violated rule's message.
pub fn validate_field(rule: &FieldRule, value: FieldValue<'_>) -> Option<String> {
    match value {
        FieldValue::Text(raw) => {
            let trimmed = raw.map(str::trim).unwrap_or("");
            if trimmed.is_empty() {
                return rule
                    .required
                    .then(|| rule.required_message.to_owned());
            }
            let len = trimmed.chars().count();
            if let Some((min, message)) = rule.min_len {
                if len < min {
                    return Some(message.to_owned());
                }
            }
            if let Some((max, message)) = rule.max_len {
                if len > max {
                    return Some(message.to_owned());
                }
            }
            if let Some((check, message)) = rule.shape {
                if !check(trimmed) {
                    return Some(message.to_owned());
                }
            }
            None
        }
        FieldValue::Integer(raw) => {
            let Some(value) = raw else {
                return rule
                    .required
                    .then(|| rule.required_message.to_owned());
            };
            if let Some((min, message)) = rule.min {
                if value < min {
                    return Some(message.to_owned());
                }
            }
            if let Some((max, message)) = rule.max {
                if value > max {
                    return Some(message.to_owned());
                }
            }
            None
        }
    }
}

/// Run every `(rule, value)` pair and collect failures into a field map.
pub fn validate_all<'a>(
    checks: impl IntoIterator<Item = (&'a FieldRule, FieldValue<'a>)>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (rule, value) in checks {
        if let Some(message) = validate_field(rule, value) {
            errors.insert(rule.field.to_owned(), message);
        }
    }
    errors
}

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    // Deliberately loose `local@domain.tld` shape, not RFC 5322.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid literal pattern")
});

/// Loose email shape check: `local@domain.tld`, no whitespace.
pub fn is_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}
