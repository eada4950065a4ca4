use thiserror::Error;
use webcore::rules::FieldErrors;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// One or more fields violate the review rules.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// The identity already has a review and attempted a create. Raised by
    /// the fast-path existence check or by the storage unique key; both
    /// surface identically to the caller.
    #[error("review already submitted")]
    Duplicate,

    /// No review exists for the identity.
    #[error("review not found")]
    NotFound,

    /// Database failure; cause is logged server-side only.
    #[error("storage failure")]
    Persistence(#[source] anyhow::Error),
}
