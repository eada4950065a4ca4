use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::model::{Review, ReviewDraft};

/// Review record as served to clients. Field names stay camelCase to match
/// what the UI consumes.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub user_id: String,
    pub image: String,
    pub name: String,
    pub profession: String,
    pub feedback: String,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            user_id: review.user_id,
            image: review.image,
            name: review.name,
            profession: review.profession,
            feedback: review.feedback,
            rating: review.rating,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// Review submission payload (create and update share the shape). Every field
/// is optional at decode time so the validator can report missing fields by
/// name instead of the decoder rejecting the whole body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitReviewRequest {
    pub image: Option<String>,
    pub name: Option<String>,
    pub profession: Option<String>,
    pub feedback: Option<String>,
    pub rating: Option<i64>,
}

impl From<SubmitReviewRequest> for ReviewDraft {
    fn from(req: SubmitReviewRequest) -> Self {
        Self {
            image: req.image,
            name: req.name,
            profession: req.profession,
            feedback: req.feedback,
            rating: req.rating,
        }
    }
}
