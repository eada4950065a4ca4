use sea_orm::entity::prelude::*;

use crate::domain::model::Review;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    /// Identity string from the auth provider. Primary key, which is what
    /// enforces one review per identity.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub image: String,
    pub name: String,
    pub profession: String,
    pub feedback: String,
    pub rating: i16,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Review {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            image: model.image,
            name: model.name,
            profession: model.profession,
            feedback: model.feedback,
            rating: model.rating,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod mapper_test {
    use super::*;
    use chrono::Utc;

    #[test]
    fn model_maps_to_domain_review() {
        let now = Utc::now();
        let model = Model {
            user_id: "user_1".to_owned(),
            image: "https://example.com/a.png".to_owned(),
            name: "Jane".to_owned(),
            profession: "Engineer".to_owned(),
            feedback: "Professional and fast delivery.".to_owned(),
            rating: 5,
            created_at: now,
            updated_at: now,
        };
        let review: Review = model.into();
        assert_eq!(review.user_id, "user_1");
        assert_eq!(review.rating, 5);
        assert_eq!(review.created_at, now);
    }
}
