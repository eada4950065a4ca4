use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::domain::service::ReviewService;

use super::handlers;

/// Review endpoint router; merged into the application router by the server.
/// Authentication is enforced per handler through the identity extractor.
pub fn router(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(
            "/api/reviews",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route(
            "/api/reviews/{identity}",
            get(handlers::get_own_review).put(handlers::update_own_review),
        )
        .layer(Extension(service))
}
