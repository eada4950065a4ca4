use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use webcore::envelope::MessageBody;

use crate::domain::error::ContactError;

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match self {
            ContactError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(MessageBody::failure(
                    "Too many requests. Please try again later.",
                )),
            )
                .into_response(),
            ContactError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(MessageBody::validation(errors)),
            )
                .into_response(),
            // Cause was already logged by the service; callers get a generic
            // message so internals never leak.
            ContactError::Persistence(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageBody::failure(
                    "Sorry, something went wrong. Please try again later.",
                )),
            )
                .into_response(),
        }
    }
}
