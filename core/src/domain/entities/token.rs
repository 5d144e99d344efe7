//! Token claims for JWT-based session handling.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default session token lifetime (1 hour)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// JWT issuer
pub const JWT_ISSUER: &str = "sipnote";

/// JWT audience
pub const JWT_AUDIENCE: &str = "sipnote-api";

/// Claims structure for JWT payload
///
/// The subject carries the member's email address, which is the
/// identity every workflow operation resolves members by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (member email)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a session token
    ///
    /// # Arguments
    ///
    /// * `email` - The member's email address
    /// * `expiry_seconds` - Token lifetime in seconds
    pub fn new(email: &str, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the member email from the claims
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("a@x.com", DEFAULT_TOKEN_EXPIRY_SECONDS);

        assert_eq!(claims.email(), "a@x.com");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_EXPIRY_SECONDS);
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new("a@x.com", -60);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_jti_uniqueness() {
        let first = Claims::new("a@x.com", DEFAULT_TOKEN_EXPIRY_SECONDS);
        let second = Claims::new("a@x.com", DEFAULT_TOKEN_EXPIRY_SECONDS);
        assert_ne!(first.jti, second.jti);
    }
}
