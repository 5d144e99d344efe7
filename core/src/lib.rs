//! # SipNote Core
//!
//! Core business logic and domain layer for the SipNote backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::entities::member::{Gender, LoginType, Member, Role};
pub use domain::entities::token::Claims;
pub use domain::value_objects::member_registration::MemberRegistration;
pub use errors::{DomainError, DomainResult, MemberError, TokenError};
pub use repositories::MemberRepository;
pub use services::member::{EmailVerificationResult, MemberService};
pub use services::password::PasswordService;
pub use services::token::{TokenService, TokenServiceConfig};
