//! Bearer-token identity resolution.
//!
//! The authentication provider is an external collaborator: it issues signed
//! tokens whose `sub` claim is the opaque identity string. This module only
//! verifies signatures and expiry; it never mints identities. Handlers that
//! need a caller identity take the [`Identity`] extractor and get a 401
//! rejection for free when no valid token is present.

use std::sync::Arc;

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::envelope::FailureBody;

#[derive(Debug, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
}

/// HS256 token verifier shared across handlers via a request extension.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify signature and expiry, returning the claims on success.
    ///
    /// # Errors
    /// Returns the underlying decode error for malformed, mis-signed or
    /// expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.key, &self.validation).map(|data| data.claims)
    }
}

/// The resolved caller identity (the token's `sub` claim).
#[derive(Debug, Clone)]
pub struct Identity(pub String);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(verifier) = parts.extensions.get::<Arc<JwtVerifier>>() else {
            tracing::error!("JwtVerifier extension not installed, rejecting request");
            return Err(AuthRejection);
        };

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim);

        let Some(token) = token else {
            return Err(AuthRejection);
        };

        match verifier.verify(token) {
            Ok(claims) if !claims.sub.is_empty() => Ok(Identity(claims.sub)),
            Ok(_) => Err(AuthRejection),
            Err(error) => {
                tracing::debug!(%error, "bearer token rejected");
                Err(AuthRejection)
            }
        }
    }
}

/// 401 with the standard failure envelope.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(FailureBody::new("Authentication required")),
        )
            .into_response()
    }
}
