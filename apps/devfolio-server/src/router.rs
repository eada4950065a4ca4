//! Application router: module routers merged with the health and OpenAPI
//! endpoints, wrapped in trace, CORS and timeout layers.

use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Json, Router, routing::get};
use chrono::TimeDelta;
use sea_orm::DatabaseConnection;
use secrecy::ExposeSecret;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use contact::ContactService;
use contact::infra::email::resend::ResendMailer;
use contact::infra::storage::sea_orm_repo::SeaOrmContactRepository;
use reviews::ReviewService;
use reviews::infra::storage::sea_orm_repo::SeaOrmReviewRepository;
use webcore::auth::JwtVerifier;
use webcore::rate_limit::SlidingWindowLimiter;

use crate::config::AppConfig;

#[derive(OpenApi)]
#[openapi(
    info(title = "Devfolio API", description = "Portfolio site backend"),
    paths(
        contact::api::rest::handlers::submit_contact,
        contact::api::rest::handlers::method_not_allowed,
        reviews::api::rest::handlers::list_reviews,
        reviews::api::rest::handlers::create_review,
        reviews::api::rest::handlers::get_own_review,
        reviews::api::rest::handlers::update_own_review,
    ),
    components(schemas(
        contact::api::rest::dto::ContactRequest,
        reviews::api::rest::dto::ReviewDto,
        reviews::api::rest::dto::SubmitReviewRequest,
        webcore::envelope::MessageBody,
        webcore::envelope::FailureBody,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "contact", description = "Contact form submissions"),
        (name = "reviews", description = "User reviews"),
    ),
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn build(db: DatabaseConnection, config: &AppConfig) -> Router {
    let limiter = Arc::new(SlidingWindowLimiter::new(
        config.contact.rate_limit_max_requests,
        TimeDelta::seconds(config.contact.rate_limit_window_secs as i64),
    ));
    let contact_service = Arc::new(ContactService::new(
        Arc::new(SeaOrmContactRepository::new(db.clone())),
        Arc::new(ResendMailer::new(&config.contact.email)),
        limiter,
        config.contact.clone(),
    ));
    let review_service = Arc::new(ReviewService::new(Arc::new(SeaOrmReviewRepository::new(
        db,
    ))));
    let verifier = Arc::new(JwtVerifier::new(
        config.auth.jwt_secret.expose_secret().as_bytes(),
    ));

    Router::new()
        .merge(contact::api::rest::routes::router(contact_service))
        .merge(reviews::api::rest::routes::router(review_service))
        .route("/api/health", get(health))
        .route("/api/openapi.json", get(openapi_json))
        .layer(Extension(verifier))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sea_orm_migration::MigratorTrait as _;
    use tower::ServiceExt as _;

    use super::*;

    async fn app() -> Router {
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        contact::infra::storage::migrations::Migrator::up(&db, None)
            .await
            .unwrap();
        reviews::infra::storage::migrations::Migrator::up(&db, None)
            .await
            .unwrap();
        build(db, &AppConfig::default())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn openapi_document_lists_all_paths() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let paths = json["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/contact"));
        assert!(paths.contains_key("/api/reviews"));
        assert!(paths.contains_key("/api/reviews/{identity}"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
