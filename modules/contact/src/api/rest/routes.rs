use std::sync::Arc;

use axum::{Extension, Router, routing::post};

use crate::domain::service::ContactService;

use super::handlers;

/// Contact endpoint router; merged into the application router by the server.
pub fn router(service: Arc<ContactService>) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(handlers::submit_contact).get(handlers::method_not_allowed),
        )
        .layer(Extension(service))
}
