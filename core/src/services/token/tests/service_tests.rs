//! Tests for the token service

use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        token_expiry_seconds: 3600,
    })
}

#[test]
fn test_generate_and_validate_round_trip() {
    let service = service();
    let token = service.generate_token("a@x.com").unwrap();

    assert!(service.validate_token(&token));
    assert_eq!(service.extract_email(&token).unwrap(), "a@x.com");
}

#[test]
fn test_tampered_token_is_invalid() {
    let service = service();
    let token = service.generate_token("a@x.com").unwrap();

    let mut tampered = token.clone();
    tampered.push('x');

    assert!(!service.validate_token(&tampered));
    assert!(matches!(
        service.extract_email(&tampered),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_garbage_token_is_invalid() {
    let service = service();

    assert!(!service.validate_token("not-a-jwt"));
    assert!(matches!(
        service.extract_email("not-a-jwt"),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_expired_token_is_rejected() {
    // Past the default decoder leeway so the expiry actually trips.
    let service = TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        token_expiry_seconds: -3600,
    });
    let token = service.generate_token("a@x.com").unwrap();

    assert!(!service.validate_token(&token));
    assert!(matches!(
        service.extract_email(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_token_from_other_secret_is_rejected() {
    let issuer = TokenService::new(TokenServiceConfig {
        jwt_secret: "other-secret".to_string(),
        token_expiry_seconds: 3600,
    });
    let verifier = service();

    let token = issuer.generate_token("a@x.com").unwrap();
    assert!(!verifier.validate_token(&token));
}
