use thiserror::Error;
use webcore::rules::FieldErrors;

#[derive(Debug, Error)]
pub enum ContactError {
    /// Caller exceeded the submission window. No side effects occurred.
    #[error("too many requests")]
    RateLimited,

    /// One or more fields violate the contact rules. No side effects occurred.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// The message could not be stored. The submission is discarded; the
    /// underlying cause is logged server-side only.
    #[error("storage failure")]
    Persistence(#[source] anyhow::Error),
}
