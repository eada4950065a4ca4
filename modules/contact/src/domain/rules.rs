//! Contact form validation rules, mirrored by the UI layer.

use webcore::rules::{FieldErrors, FieldRule, FieldValue, is_email, validate_all};

use super::model::ContactInput;

pub const NAME: FieldRule = FieldRule {
    required: true,
    required_message: "Name is required",
    max_len: Some((100, "Name cannot exceed 100 characters")),
    ..FieldRule::optional("name")
};

pub const EMAIL: FieldRule = FieldRule {
    required: true,
    required_message: "Email is required",
    shape: Some((is_email, "Please enter a valid email address")),
    ..FieldRule::optional("email")
};

pub const PHONE: FieldRule = FieldRule {
    max_len: Some((20, "Phone number cannot exceed 20 characters")),
    ..FieldRule::optional("phone")
};

pub const MESSAGE: FieldRule = FieldRule {
    required: true,
    required_message: "Message is required",
    max_len: Some((1000, "Message cannot exceed 1000 characters")),
    ..FieldRule::optional("message")
};

/// Validate a raw contact payload. An empty map means the payload is valid.
pub fn validate_contact(input: &ContactInput) -> FieldErrors {
    validate_all([
        (&NAME, FieldValue::Text(input.name.as_deref())),
        (&EMAIL, FieldValue::Text(input.email.as_deref())),
        (&PHONE, FieldValue::Text(input.phone.as_deref())),
        (&MESSAGE, FieldValue::Text(input.message.as_deref())),
    ])
}
