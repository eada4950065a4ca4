use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use webcore::auth::Identity;
use webcore::envelope::DataBody;

use crate::domain::model::ReviewDraft;
use crate::domain::service::ReviewService;

use super::dto::{ReviewDto, SubmitReviewRequest};

fn draft_from(body: Result<Json<SubmitReviewRequest>, JsonRejection>) -> ReviewDraft {
    match body {
        Ok(Json(request)) => request.into(),
        // An undecodable body validates as an all-missing payload, producing
        // the per-field error map instead of a decoder error.
        Err(rejection) => {
            tracing::debug!(%rejection, "review body did not decode");
            ReviewDraft::default()
        }
    }
}

/// GET /api/reviews — public, newest creation first.
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "reviews",
    responses(
        (status = 200, description = "All reviews, newest first", body = [ReviewDto]),
        (status = 500, description = "Storage failure"),
    ),
)]
pub async fn list_reviews(Extension(service): Extension<Arc<ReviewService>>) -> Response {
    match service.list().await {
        Ok(reviews) => {
            let dtos: Vec<ReviewDto> = reviews.into_iter().map(Into::into).collect();
            Json(DataBody::new(dtos)).into_response()
        }
        Err(error) => error.into_response(),
    }
}

/// POST /api/reviews — first submission for the authenticated identity.
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "reviews",
    request_body = SubmitReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Validation failed or already submitted"),
        (status = 401, description = "Authentication required"),
        (status = 500, description = "Storage failure"),
    ),
    security(("bearer" = [])),
)]
pub async fn create_review(
    Identity(user_id): Identity,
    Extension(service): Extension<Arc<ReviewService>>,
    body: Result<Json<SubmitReviewRequest>, JsonRejection>,
) -> Response {
    match service.create(&user_id, draft_from(body)).await {
        Ok(review) => (
            StatusCode::CREATED,
            Json(DataBody::new(ReviewDto::from(review))),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}

/// GET /api/reviews/{identity} — the authenticated caller's own review.
///
/// The path segment exists for routing symmetry with PUT; the record is
/// always looked up by the verified token identity, never the raw path.
#[utoipa::path(
    get,
    path = "/api/reviews/{identity}",
    tag = "reviews",
    params(("identity" = String, Path, description = "Identity, informational")),
    responses(
        (status = 200, description = "The caller's review", body = ReviewDto),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "No review for this identity"),
    ),
    security(("bearer" = [])),
)]
pub async fn get_own_review(
    Identity(user_id): Identity,
    Extension(service): Extension<Arc<ReviewService>>,
) -> Response {
    match service.get(&user_id).await {
        Ok(review) => Json(DataBody::new(ReviewDto::from(review))).into_response(),
        Err(error) => error.into_response(),
    }
}

/// PUT /api/reviews/{identity} — update-in-place of the caller's review.
#[utoipa::path(
    put,
    path = "/api/reviews/{identity}",
    tag = "reviews",
    params(("identity" = String, Path, description = "Identity, informational")),
    request_body = SubmitReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = ReviewDto),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "No review for this identity"),
        (status = 500, description = "Storage failure"),
    ),
    security(("bearer" = [])),
)]
pub async fn update_own_review(
    Identity(user_id): Identity,
    Extension(service): Extension<Arc<ReviewService>>,
    body: Result<Json<SubmitReviewRequest>, JsonRejection>,
) -> Response {
    match service.update(&user_id, draft_from(body)).await {
        Ok(review) => Json(DataBody::new(ReviewDto::from(review))).into_response(),
        Err(error) => error.into_response(),
    }
}
