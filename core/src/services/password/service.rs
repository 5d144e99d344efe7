//! Password hashing and verification built on bcrypt

use crate::errors::{DomainError, DomainResult};

/// One-way password hashing service
///
/// Wraps bcrypt so the stored hash never equals the plaintext and each
/// hash carries its own salt.
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Create a service with the default bcrypt cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a service with an explicit cost (lower costs for tests)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verify a plaintext password against a stored hash
    pub fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}
