//! Member repository trait defining the interface for member data persistence.
//!
//! This module defines the repository pattern interface for Member entities.
//! The trait is async-first and uses Result types for proper error handling;
//! implementations handle the actual database operations while maintaining
//! the abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;

use crate::domain::entities::member::Member;
use crate::errors::DomainError;

/// Repository trait for Member entity persistence operations
///
/// Members are keyed by their unique email address. Implementations
/// must enforce email uniqueness on creation.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find a member by email address
    ///
    /// # Arguments
    /// * `email` - The member's email address
    ///
    /// # Returns
    /// * `Ok(Some(Member))` - Member found
    /// * `Ok(None)` - No member registered under this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError>;

    /// Check if a member exists with the given email address
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new member in the repository
    ///
    /// # Returns
    /// * `Ok(Member)` - The created member
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate email)
    async fn create(&self, member: Member) -> Result<Member, DomainError>;

    /// Update an existing member in the repository
    ///
    /// # Returns
    /// * `Ok(Member)` - The updated member
    /// * `Err(DomainError)` - Update failed (e.g., member not found)
    async fn update(&self, member: Member) -> Result<Member, DomainError>;

    /// Delete a member by email address
    ///
    /// # Returns
    /// * `Ok(true)` - Member was deleted
    /// * `Ok(false)` - Member not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
