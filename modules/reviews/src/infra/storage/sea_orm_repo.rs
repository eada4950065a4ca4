use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr,
};

use crate::domain::model::{Review, ReviewFields};
use crate::domain::repo::{RepoError, ReviewRepository};

use super::entity::{self, Entity as ReviewEntity};

pub struct SeaOrmReviewRepository {
    db: DatabaseConnection,
}

impl SeaOrmReviewRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_db_err(error: DbErr) -> RepoError {
    if matches!(error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        RepoError::UniqueViolation
    } else {
        RepoError::Other(error.into())
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Review>, RepoError> {
        let model = ReviewEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Into::into))
    }

    async fn insert(&self, review: Review) -> Result<Review, RepoError> {
        let active_model = entity::ActiveModel {
            user_id: ActiveValue::Set(review.user_id),
            image: ActiveValue::Set(review.image),
            name: ActiveValue::Set(review.name),
            profession: ActiveValue::Set(review.profession),
            feedback: ActiveValue::Set(review.feedback),
            rating: ActiveValue::Set(review.rating),
            created_at: ActiveValue::Set(review.created_at),
            updated_at: ActiveValue::Set(review.updated_at),
        };
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn update(
        &self,
        user_id: &str,
        fields: ReviewFields,
    ) -> Result<Option<Review>, RepoError> {
        let existing = ReviewEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active_model: entity::ActiveModel = existing.into();
        active_model.image = ActiveValue::Set(fields.image);
        active_model.name = ActiveValue::Set(fields.name);
        active_model.profession = ActiveValue::Set(fields.profession);
        active_model.feedback = ActiveValue::Set(fields.feedback);
        active_model.rating = ActiveValue::Set(fields.rating);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(&self.db).await.map_err(map_db_err)?;
        Ok(Some(model.into()))
    }

    async fn list_newest_first(&self) -> Result<Vec<Review>, RepoError> {
        let models = ReviewEntity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
