#[cfg(test)]
mod tests {
    use super::super::error::ReviewError;
    use super::super::model::{Review, ReviewDraft, ReviewFields};
    use super::super::repo::{RepoError, ReviewRepository};
    use super::super::service::ReviewService;
    use async_trait::async_trait;
    use chrono::{TimeDelta, Utc};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// In-memory repository with the same contract as the real one: the map
    /// key plays the part of the unique index on the identity.
    #[derive(Default)]
    struct InMemoryRepository {
        rows: Mutex<HashMap<String, Review>>,
        /// Simulates the check-then-insert race: the fast-path read sees
        /// nothing, but the unique key still fires on insert.
        hide_from_find: bool,
    }

    #[async_trait]
    impl ReviewRepository for InMemoryRepository {
        async fn find_by_user(&self, user_id: &str) -> Result<Option<Review>, RepoError> {
            if self.hide_from_find {
                return Ok(None);
            }
            Ok(self.rows.lock().unwrap().get(user_id).cloned())
        }

        async fn insert(&self, review: Review) -> Result<Review, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.contains_key(&review.user_id) {
                return Err(RepoError::UniqueViolation);
            }
            rows.insert(review.user_id.clone(), review.clone());
            Ok(review)
        }

        async fn update(
            &self,
            user_id: &str,
            fields: ReviewFields,
        ) -> Result<Option<Review>, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            let Some(row) = rows.get_mut(user_id) else {
                return Ok(None);
            };
            row.image = fields.image;
            row.name = fields.name;
            row.profession = fields.profession;
            row.feedback = fields.feedback;
            row.rating = fields.rating;
            row.updated_at = Utc::now();
            Ok(Some(row.clone()))
        }

        async fn list_newest_first(&self) -> Result<Vec<Review>, RepoError> {
            let mut all: Vec<Review> = self.rows.lock().unwrap().values().cloned().collect();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(all)
        }
    }

    fn service() -> (Arc<InMemoryRepository>, ReviewService) {
        let repo = Arc::new(InMemoryRepository::default());
        (repo.clone(), ReviewService::new(repo))
    }

    fn draft() -> ReviewDraft {
        ReviewDraft {
            image: None,
            name: Some("Jane".to_owned()),
            profession: Some("Engineer".to_owned()),
            feedback: Some("Professional and fast delivery.".to_owned()),
            rating: Some(4),
        }
    }

    #[tokio::test]
    async fn create_then_fetch() {
        let (_, svc) = service();
        let created = svc.create("user_1", draft()).await.unwrap();
        assert_eq!(created.user_id, "user_1");
        assert_eq!(created.rating, 4);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = svc.get("user_1").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn second_create_is_duplicate() {
        let (_, svc) = service();
        svc.create("user_1", draft()).await.unwrap();
        let result = svc.create("user_1", draft()).await;
        assert!(matches!(result, Err(ReviewError::Duplicate)));
    }

    #[tokio::test]
    async fn unique_violation_maps_to_duplicate_not_persistence() {
        // Fast-path read misses, unique key still fires: the create race.
        let repo = Arc::new(InMemoryRepository {
            hide_from_find: true,
            ..InMemoryRepository::default()
        });
        let svc = ReviewService::new(repo);
        svc.create("user_1", draft()).await.unwrap();
        let result = svc.create("user_1", draft()).await;
        assert!(matches!(result, Err(ReviewError::Duplicate)));
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_storage() {
        let (repo, svc) = service();
        let result = svc.create("user_1", ReviewDraft::default()).await;
        let Err(ReviewError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        assert!(errors.contains_key("name"));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_advances_updated_at_and_keeps_created_at() {
        let (repo, svc) = service();
        let created = svc.create("user_1", draft()).await.unwrap();

        // Push the stored timestamps into the past so the refresh is visible.
        {
            let mut rows = repo.rows.lock().unwrap();
            let row = rows.get_mut("user_1").unwrap();
            row.created_at -= TimeDelta::hours(1);
            row.updated_at -= TimeDelta::hours(1);
        }

        let mut changed = draft();
        changed.feedback = Some("Even better the second time.".to_owned());
        let updated = svc.update("user_1", changed).await.unwrap();

        assert_eq!(updated.feedback, "Even better the second time.");
        assert_eq!(updated.created_at, created.created_at - TimeDelta::hours(1));
        assert!(updated.updated_at > updated.created_at);
    }

    #[tokio::test]
    async fn update_without_image_keeps_stored_image() {
        let (_, svc) = service();
        let mut with_photo = draft();
        with_photo.image = Some("https://example.com/my-real-photo.png".to_owned());
        svc.create("user_1", with_photo).await.unwrap();

        let mut changed = draft();
        changed.image = None;
        changed.feedback = Some("Even better the second time.".to_owned());
        let updated = svc.update("user_1", changed).await.unwrap();

        assert_eq!(updated.image, "https://example.com/my-real-photo.png");
        assert_eq!(updated.feedback, "Even better the second time.");
    }

    #[tokio::test]
    async fn update_with_explicit_image_replaces_it() {
        let (_, svc) = service();
        svc.create("user_1", draft()).await.unwrap();

        let mut changed = draft();
        changed.image = Some("https://example.com/new-photo.png".to_owned());
        let updated = svc.update("user_1", changed).await.unwrap();

        assert_eq!(updated.image, "https://example.com/new-photo.png");
    }

    #[tokio::test]
    async fn repeated_identical_update_only_moves_updated_at() {
        let (repo, svc) = service();
        svc.create("user_1", draft()).await.unwrap();

        let first = svc.update("user_1", draft()).await.unwrap();
        {
            let mut rows = repo.rows.lock().unwrap();
            rows.get_mut("user_1").unwrap().updated_at -= TimeDelta::minutes(5);
        }
        let second = svc.update("user_1", draft()).await.unwrap();

        assert_eq!(first.name, second.name);
        assert_eq!(first.feedback, second.feedback);
        assert_eq!(first.rating, second.rating);
        assert_eq!(first.created_at, second.created_at);
        assert_ne!(first.updated_at, second.updated_at);
    }

    #[tokio::test]
    async fn update_without_existing_review_is_not_found() {
        let (_, svc) = service();
        let result = svc.update("user_1", draft()).await;
        assert!(matches!(result, Err(ReviewError::NotFound)));
    }

    #[tokio::test]
    async fn get_without_review_is_not_found() {
        let (_, svc) = service();
        let result = svc.get("user_1").await;
        assert!(matches!(result, Err(ReviewError::NotFound)));
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (repo, svc) = service();
        for (i, user) in ["a", "b", "c"].iter().enumerate() {
            let mut d = draft();
            d.name = Some(format!("User {user}"));
            svc.create(user, d).await.unwrap();
            // Separate the creation instants deterministically.
            let mut rows = repo.rows.lock().unwrap();
            let row = rows.get_mut(*user).unwrap();
            row.created_at += TimeDelta::seconds(i as i64);
        }

        let listed = svc.list().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["User c", "User b", "User a"]);
    }
}
