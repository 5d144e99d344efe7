//! Domain error to HTTP response mapping
//!
//! Every business-error kind maps to exactly one error code and HTTP
//! status, so clients can branch on the code without parsing messages.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use sn_core::errors::{DomainError, MemberError, TokenError};
use sn_shared::types::response::ErrorResponse;

/// Convert a domain error into an HTTP response
pub fn to_error_response(error: &DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::Member(member_error) => match member_error {
            MemberError::MemberExists => HttpResponse::Conflict()
                .json(ErrorResponse::new("MEMBER_EXISTS", member_error.to_string())),
            MemberError::MemberNotFound => HttpResponse::NotFound()
                .json(ErrorResponse::new("MEMBER_NOT_FOUND", member_error.to_string())),
            MemberError::SecureRandomUnavailable => HttpResponse::InternalServerError()
                .json(ErrorResponse::new("NO_SUCH_ALGORITHM", member_error.to_string())),
            MemberError::MailServiceFailure => HttpResponse::ServiceUnavailable()
                .json(ErrorResponse::new("MAIL_SERVICE_FAILURE", member_error.to_string())),
            MemberError::InvalidEmailFormat { .. } => HttpResponse::BadRequest()
                .json(ErrorResponse::new("INVALID_EMAIL_FORMAT", member_error.to_string())),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::InvalidToken => HttpResponse::Unauthorized()
                .json(ErrorResponse::new("INVALID_TOKEN", token_error.to_string())),
            TokenError::TokenExpired => HttpResponse::Unauthorized()
                .json(ErrorResponse::new("TOKEN_EXPIRED", token_error.to_string())),
            TokenError::MissingClaim { .. } => HttpResponse::Unauthorized()
                .json(ErrorResponse::new("MISSING_CLAIM", token_error.to_string())),
            TokenError::TokenGenerationFailed => HttpResponse::InternalServerError()
                .json(ErrorResponse::new("TOKEN_GENERATION_FAILED", token_error.to_string())),
        },
        DomainError::Validation { message } => HttpResponse::BadRequest()
            .json(ErrorResponse::new("VALIDATION_ERROR", message)),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            format!("Resource not found: {}", resource),
        )),
        DomainError::Internal { .. } => HttpResponse::InternalServerError().json(
            ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
        ),
    }
}

/// Convert request-body validation failures into a 400 response
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();

    log::warn!("Request validation failed for fields: {:?}", fields);

    HttpResponse::BadRequest().json(ErrorResponse::new(
        "VALIDATION_ERROR",
        format!("Invalid request data in fields: {}", fields.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_member_exists_maps_to_conflict() {
        let response = to_error_response(&DomainError::Member(MemberError::MemberExists));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_member_not_found_maps_to_not_found() {
        let response = to_error_response(&DomainError::Member(MemberError::MemberNotFound));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_token_maps_to_unauthorized() {
        let response = to_error_response(&DomainError::Token(TokenError::InvalidToken));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response = to_error_response(&DomainError::Internal {
            message: "connection string: mysql://root:secret@db".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_secure_random_maps_to_server_error() {
        let response =
            to_error_response(&DomainError::Member(MemberError::SecureRandomUnavailable));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
