//! Business services containing domain logic and use cases.

pub mod member;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use member::{
    CodeStoreTrait, EmailVerificationResult, MailServiceTrait, MemberService, SendCodeResult,
    AUTH_CODE_PREFIX, CODE_LENGTH,
};
pub use password::PasswordService;
pub use token::{TokenService, TokenServiceConfig};
