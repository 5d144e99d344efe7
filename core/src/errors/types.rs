//! Domain-specific error types for member and token operations
//!
//! Every business-rule violation surfaces as a distinguishable kind so
//! the presentation layer can map each one to a specific response. No
//! operation recovers or retries locally.

use thiserror::Error;

/// Member-related errors
#[derive(Error, Debug)]
pub enum MemberError {
    #[error("Member already exists")]
    MemberExists,

    #[error("Member not found")]
    MemberNotFound,

    /// The platform offers no cryptographically strong random source.
    /// Fatal and environmental rather than user-facing.
    #[error("Secure random source unavailable")]
    SecureRandomUnavailable,

    #[error("Mail service failure")]
    MailServiceFailure,

    #[error("Invalid email format: {email}")]
    InvalidEmailFormat { email: String },
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_error_messages() {
        assert_eq!(MemberError::MemberExists.to_string(), "Member already exists");
        assert_eq!(MemberError::MemberNotFound.to_string(), "Member not found");

        let error = MemberError::InvalidEmailFormat {
            email: "b***@x.com".to_string(),
        };
        assert!(error.to_string().contains("b***@x.com"));
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::InvalidToken.to_string(), "Invalid token");

        let error = TokenError::MissingClaim {
            claim: "sub".to_string(),
        };
        assert!(error.to_string().contains("sub"));
    }
}
