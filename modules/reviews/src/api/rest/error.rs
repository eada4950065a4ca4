use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use webcore::envelope::FailureBody;

use crate::domain::error::ReviewError;

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        match self {
            ReviewError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(FailureBody::validation(errors)),
            )
                .into_response(),
            ReviewError::Duplicate => (
                StatusCode::BAD_REQUEST,
                Json(FailureBody::new(
                    "You have already submitted a review. Thank You!",
                )),
            )
                .into_response(),
            ReviewError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(FailureBody::new("Review not found")),
            )
                .into_response(),
            // Cause was already logged by the service; callers get a generic
            // message so internals never leak.
            ReviewError::Persistence(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureBody::new(
                    "Something went wrong. Please try again later.",
                )),
            )
                .into_response(),
        }
    }
}
