//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the SipNote
//! backend. It provides concrete implementations for the collaborator
//! traits the core crate defines:
//! - **Database**: MySQL member repository using SQLx
//! - **Cache**: the in-process verification-code store
//! - **Mail**: outbound mail providers (Mailgun API, mock)

pub mod cache;
pub mod database;
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail service error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
