//! In-memory implementation of MemberRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::member::Member;
use crate::errors::{DomainError, MemberError};

use super::trait_::MemberRepository;

/// Mock member repository for testing
///
/// Backed by a map keyed by email so the unique-email invariant matches
/// the production schema.
pub struct MockMemberRepository {
    members: Arc<RwLock<HashMap<String, Member>>>,
}

impl MockMemberRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            members: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository seeded with an existing member
    pub async fn with_existing_member(member: Member) -> Self {
        let repo = Self::new();
        repo.members
            .write()
            .await
            .insert(member.email.clone(), member);
        repo
    }
}

impl Default for MockMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().await;
        Ok(members.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let members = self.members.read().await;
        Ok(members.contains_key(email))
    }

    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        let mut members = self.members.write().await;

        if members.contains_key(&member.email) {
            return Err(DomainError::Member(MemberError::MemberExists));
        }

        members.insert(member.email.clone(), member.clone());
        Ok(member)
    }

    async fn update(&self, member: Member) -> Result<Member, DomainError> {
        let mut members = self.members.write().await;

        if !members.contains_key(&member.email) {
            return Err(DomainError::NotFound {
                resource: "Member".to_string(),
            });
        }

        members.insert(member.email.clone(), member.clone());
        Ok(member)
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let mut members = self.members.write().await;
        Ok(members.remove(email).is_some())
    }
}
