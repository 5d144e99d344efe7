//! Outbound mail configuration

use serde::{Deserialize, Serialize};

/// Configuration for the outbound mail provider and verification codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider ("mailgun", "mock")
    pub provider: String,

    /// Provider API key
    pub api_key: String,

    /// Sending domain registered with the provider
    pub domain: String,

    /// From address for outbound mail
    pub from_address: String,

    /// Subject line for verification-code mail
    #[serde(default = "default_verification_subject")]
    pub verification_subject: String,

    /// Lifetime of a stored verification code in milliseconds
    #[serde(default = "default_auth_code_expiration_millis")]
    pub auth_code_expiration_millis: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_key: String::new(),
            domain: String::new(),
            from_address: String::from("no-reply@sipnote.app"),
            verification_subject: default_verification_subject(),
            auth_code_expiration_millis: default_auth_code_expiration_millis(),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(provider) = std::env::var("MAIL_PROVIDER") {
            config.provider = provider;
        }
        if let Ok(api_key) = std::env::var("MAIL_API_KEY") {
            config.api_key = api_key;
        }
        if let Ok(domain) = std::env::var("MAIL_DOMAIN") {
            config.domain = domain;
        }
        if let Ok(from_address) = std::env::var("MAIL_FROM_ADDRESS") {
            config.from_address = from_address;
        }
        if let Ok(millis) = std::env::var("AUTH_CODE_EXPIRATION_MILLIS") {
            if let Ok(parsed) = millis.parse() {
                config.auth_code_expiration_millis = parsed;
            }
        }
        config
    }
}

fn default_verification_subject() -> String {
    String::from("SipNote email verification code")
}

fn default_auth_code_expiration_millis() -> u64 {
    300_000 // 5 minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mail_config() {
        let config = MailConfig::default();
        assert_eq!(config.provider, "mock");
        assert_eq!(config.auth_code_expiration_millis, 300_000);
        assert!(config.from_address.contains('@'));
    }
}
