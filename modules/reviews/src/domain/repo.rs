use async_trait::async_trait;
use thiserror::Error;

use super::model::{Review, ReviewFields};

#[derive(Debug, Error)]
pub enum RepoError {
    /// The storage-level unique key on the identity fired. This is the
    /// authoritative one-review-per-identity guard; the service maps it to
    /// the user-facing duplicate error.
    #[error("a review already exists for this identity")]
    UniqueViolation,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Review>, RepoError>;

    /// Insert a new review. Fails with [`RepoError::UniqueViolation`] when the
    /// identity already has one.
    async fn insert(&self, review: Review) -> Result<Review, RepoError>;

    /// Update the identity's review in place, refreshing `updated_at`.
    /// Returns `None` when no review exists for the identity.
    async fn update(
        &self,
        user_id: &str,
        fields: ReviewFields,
    ) -> Result<Option<Review>, RepoError>;

    /// All reviews, newest creation first.
    async fn list_newest_first(&self) -> Result<Vec<Review>, RepoError>;
}
