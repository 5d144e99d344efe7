//! Configuration for the token service

use crate::domain::entities::token::DEFAULT_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-only-secret"),
            token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl From<&sn_shared::config::JwtConfig> for TokenServiceConfig {
    fn from(config: &sn_shared::config::JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            token_expiry_seconds: config.access_token_expiry,
        }
    }
}
