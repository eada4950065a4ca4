use std::sync::Arc;

use chrono::Utc;

use super::error::ReviewError;
use super::model::{Review, ReviewDraft};
use super::repo::{RepoError, ReviewRepository};
use super::rules::validate_review;

pub struct ReviewService {
    repo: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self {
        Self { repo }
    }

    /// All reviews, newest creation first. Public; no identity required.
    ///
    /// # Errors
    /// [`ReviewError::Persistence`] when the read fails.
    pub async fn list(&self) -> Result<Vec<Review>, ReviewError> {
        self.repo
            .list_newest_first()
            .await
            .map_err(Self::persistence)
    }

    /// The identity's own review.
    ///
    /// # Errors
    /// [`ReviewError::NotFound`] when the identity has none.
    pub async fn get(&self, user_id: &str) -> Result<Review, ReviewError> {
        self.repo
            .find_by_user(user_id)
            .await
            .map_err(Self::persistence)?
            .ok_or(ReviewError::NotFound)
    }

    /// First submission for an identity.
    ///
    /// The existence check is a fast path for a clean error message; two
    /// concurrent creates can both pass it, and the unique key at insert time
    /// is what actually guarantees at most one review per identity. Either
    /// guard surfaces as the same [`ReviewError::Duplicate`].
    ///
    /// # Errors
    /// [`ReviewError::Validation`], [`ReviewError::Duplicate`] or
    /// [`ReviewError::Persistence`].
    pub async fn create(
        &self,
        user_id: &str,
        draft: ReviewDraft,
    ) -> Result<Review, ReviewError> {
        let errors = validate_review(&draft);
        if !errors.is_empty() {
            return Err(ReviewError::Validation(errors));
        }

        let existing = self
            .repo
            .find_by_user(user_id)
            .await
            .map_err(Self::persistence)?;
        if existing.is_some() {
            return Err(ReviewError::Duplicate);
        }

        let fields = draft.into_fields();
        let now = Utc::now();
        let review = Review {
            user_id: user_id.to_owned(),
            image: fields.image,
            name: fields.name,
            profession: fields.profession,
            feedback: fields.feedback,
            rating: fields.rating,
            created_at: now,
            updated_at: now,
        };

        match self.repo.insert(review).await {
            Ok(created) => {
                tracing::info!(user_id, "review created");
                Ok(created)
            }
            Err(RepoError::UniqueViolation) => {
                // Lost the race against a concurrent create; same outcome as
                // the fast-path check.
                tracing::debug!(user_id, "duplicate review insert blocked by unique key");
                Err(ReviewError::Duplicate)
            }
            Err(RepoError::Other(error)) => Err(Self::persistence(RepoError::Other(error))),
        }
    }

    /// Replace the identity's existing review, advancing `updated_at`.
    ///
    /// An omitted image keeps the stored one rather than falling back to a
    /// generated avatar; a user editing only their feedback must not lose
    /// their photo. Profession still re-defaults when omitted.
    ///
    /// # Errors
    /// [`ReviewError::Validation`], [`ReviewError::NotFound`] or
    /// [`ReviewError::Persistence`].
    pub async fn update(
        &self,
        user_id: &str,
        draft: ReviewDraft,
    ) -> Result<Review, ReviewError> {
        let errors = validate_review(&draft);
        if !errors.is_empty() {
            return Err(ReviewError::Validation(errors));
        }

        let existing = self
            .repo
            .find_by_user(user_id)
            .await
            .map_err(Self::persistence)?
            .ok_or(ReviewError::NotFound)?;

        let keep_stored_image = !draft.has_image();
        let mut fields = draft.into_fields();
        if keep_stored_image {
            fields.image = existing.image;
        }

        let updated = self
            .repo
            .update(user_id, fields)
            .await
            .map_err(Self::persistence)?;
        match updated {
            Some(review) => {
                tracing::info!(user_id, "review updated");
                Ok(review)
            }
            None => Err(ReviewError::NotFound),
        }
    }

    fn persistence(error: RepoError) -> ReviewError {
        tracing::error!(%error, "review storage failure");
        ReviewError::Persistence(error.into())
    }
}
