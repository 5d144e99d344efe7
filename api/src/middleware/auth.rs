//! Bearer token extraction for protected endpoints.
//!
//! Handlers pass the raw token to the member workflow, which validates
//! it and resolves the email claim. This extractor only guards that a
//! well-formed `Authorization: Bearer <token>` header is present.

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

use sn_shared::types::response::ErrorResponse;

/// The raw bearer token from the Authorization header
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// The token string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for BearerToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_bearer_token(req).ok_or_else(unauthorized))
    }
}

fn extract_bearer_token(req: &HttpRequest) -> Option<BearerToken> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(BearerToken(token.to_string()))
}

fn unauthorized() -> actix_web::Error {
    actix_web::error::InternalError::from_response(
        "missing bearer token",
        actix_web::HttpResponse::Unauthorized().json(ErrorResponse::new(
            "INVALID_TOKEN",
            "Missing or invalid Authorization header",
        )),
    )
    .into()
}
