//! Unit tests for the mock member repository

use chrono::NaiveDate;

use crate::domain::entities::member::{Gender, Member};
use crate::errors::{DomainError, MemberError};
use crate::repositories::member::{MemberRepository, MockMemberRepository};

fn member(email: &str) -> Member {
    Member::new(
        email.to_string(),
        "Ari".to_string(),
        NaiveDate::from_ymd_opt(1995, 6, 14).unwrap(),
        "010-1234-5678".to_string(),
        Gender::Other,
    )
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = MockMemberRepository::new();
    let created = repo.create(member("a@x.com")).await.unwrap();

    let found = repo.find_by_email("a@x.com").await.unwrap();
    assert_eq!(found, Some(created));
    assert!(repo.exists_by_email("a@x.com").await.unwrap());
    assert!(!repo.exists_by_email("b@x.com").await.unwrap());
}

#[tokio::test]
async fn test_create_rejects_duplicate_email() {
    let repo = MockMemberRepository::new();
    repo.create(member("a@x.com")).await.unwrap();

    let result = repo.create(member("a@x.com")).await;
    assert!(matches!(
        result,
        Err(DomainError::Member(MemberError::MemberExists))
    ));
}

#[tokio::test]
async fn test_update_missing_member_fails() {
    let repo = MockMemberRepository::new();
    let result = repo.update(member("a@x.com")).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_by_email() {
    let repo = MockMemberRepository::with_existing_member(member("a@x.com")).await;

    assert!(repo.delete_by_email("a@x.com").await.unwrap());
    assert!(!repo.delete_by_email("a@x.com").await.unwrap());
    assert_eq!(repo.find_by_email("a@x.com").await.unwrap(), None);
}
