//! Traits for mail and code-store integration

use async_trait::async_trait;

/// Trait for outbound mail integration
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send a verification code by email, returning a provider message id
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
    /// Check if the email address format is valid
    fn is_valid_email(&self, email: &str) -> bool;
}

/// Trait for the process-wide verification-code store
///
/// `save` overwrites any prior value for the key; `get` returns the
/// current value or `None` when no live entry exists.
#[async_trait]
pub trait CodeStoreTrait: Send + Sync {
    /// Store a verification code under a scoped key
    async fn save(&self, key: &str, code: &str) -> Result<(), String>;
    /// Fetch the current code for a scoped key
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
}
