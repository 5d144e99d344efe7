//! In-process cache layer
//!
//! Holds the verification-code store. The store is an owned component
//! injected at startup, not a process-global static, so its lifecycle
//! and expiry behavior stay visible and testable.

pub mod auth_code_store;

pub use auth_code_store::InMemoryAuthCodeStore;
