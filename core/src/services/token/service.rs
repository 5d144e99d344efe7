//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and validating HS256 session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a session token for a member email
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - `TokenGenerationFailed` if encoding fails
    pub fn generate_token(&self, email: &str) -> DomainResult<String> {
        let claims = Claims::new(email, self.config.token_expiry_seconds);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Checks whether a token is currently valid
    pub fn validate_token(&self, token: &str) -> bool {
        self.decode_claims(token).is_ok()
    }

    /// Extracts the member email claim from a token
    ///
    /// Decoding verifies the signature, expiry, issuer, and audience
    /// before the claim is trusted.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The email the token was issued for
    /// * `Err(DomainError)` - `InvalidToken`, `TokenExpired`, or
    ///   `MissingClaim` when the subject is empty
    pub fn extract_email(&self, token: &str) -> DomainResult<String> {
        let claims = self.decode_claims(token)?;
        if claims.sub.is_empty() {
            return Err(DomainError::Token(TokenError::MissingClaim {
                claim: "sub".to_string(),
            }));
        }
        Ok(claims.sub)
    }

    fn decode_claims(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::Token(TokenError::TokenExpired)
                }
                _ => DomainError::Token(TokenError::InvalidToken),
            })
    }
}
