use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::model::ContactInput;

/// Contact form payload. Every field is optional at decode time so the
/// validator can report missing fields by name instead of the decoder
/// rejecting the whole body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl From<ContactRequest> for ContactInput {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            message: req.message,
        }
    }
}
