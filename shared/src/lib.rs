//! Shared utilities and common types for the SipNote server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures
//! - Utility functions (email validation, masking, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, JwtConfig, MailConfig, ServerConfig,
};
pub use types::response::ErrorResponse;
pub use utils::validation;
