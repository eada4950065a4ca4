//! Response envelope shared by every API endpoint.
//!
//! All endpoints answer with a `success` flag plus either a human-readable
//! message (contact flow) or a `data` payload / `error` string (review flow),
//! so UI code can branch on one field regardless of endpoint.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Message-style success/failure body used by the contact endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
    /// Present when the submission was stored but a side effect degraded
    /// (e.g. the notification email could not be delivered).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Field name to human-readable message, only for failing fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl MessageBody {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            warning: None,
            errors: None,
        }
    }

    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            warning: None,
            errors: None,
        }
    }

    pub fn validation(errors: BTreeMap<String, String>) -> Self {
        Self {
            success: false,
            message: "Validation failed".to_owned(),
            warning: None,
            errors: Some(errors),
        }
    }
}

/// Data-style success body used by the review endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DataBody<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error body used by the review endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
    /// Field name to human-readable message, only for failing fields.
    #[serde(
        rename = "validationErrors",
        skip_serializing_if = "Option::is_none"
    )]
    pub validation_errors: Option<BTreeMap<String, String>>,
}

impl FailureBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            validation_errors: None,
        }
    }

    pub fn validation(errors: BTreeMap<String, String>) -> Self {
        Self {
            success: false,
            error: "Validation failed".to_owned(),
            validation_errors: Some(errors),
        }
    }
}
