use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use webcore::client_ip::{resolve_caller_address, resolve_user_agent};
use webcore::envelope::MessageBody;

use crate::domain::model::ContactInput;
use crate::domain::service::{ContactService, SubmissionContext};

use super::dto::ContactRequest;

/// POST /api/contact
///
/// A body that fails to decode is treated as an empty payload: the rate
/// limiter still answers first (a limited caller sees 429, not a decode
/// error) and an allowed caller gets the full per-field validation map.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = MessageBody),
        (status = 400, description = "Validation failed", body = MessageBody),
        (status = 429, description = "Rate limited", body = MessageBody),
        (status = 500, description = "Storage failure", body = MessageBody),
    ),
)]
pub async fn submit_contact(
    headers: HeaderMap,
    Extension(service): Extension<Arc<ContactService>>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let ctx = SubmissionContext {
        caller_address: resolve_caller_address(&headers),
        user_agent: resolve_user_agent(&headers),
    };
    let input: ContactInput = match body {
        Ok(Json(request)) => request.into(),
        Err(rejection) => {
            tracing::debug!(%rejection, "contact body did not decode");
            ContactInput::default()
        }
    };

    match service.submit(&ctx, &input).await {
        Ok(outcome) if outcome.email_sent => Json(MessageBody::ok(
            "Thank you for your message! I'll get back to you soon.",
        ))
        .into_response(),
        Ok(_) => Json(
            MessageBody::ok("Your message has been received. I'll get back to you soon.")
                .with_warning("Email delivery encountered an issue, but your message was saved."),
        )
        .into_response(),
        Err(error) => error.into_response(),
    }
}

/// GET /api/contact — the endpoint only accepts POST.
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses((status = 405, description = "Method not allowed")),
)]
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "message": "Method not allowed" })),
    )
        .into_response()
}
