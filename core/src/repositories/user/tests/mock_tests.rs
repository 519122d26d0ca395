//! Unit tests for mock user repository

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

async fn seeded_repo(code: &str) -> MockUserRepository {
    let repo = MockUserRepository::new();
    let mut user = User::new("user@x.com");
    user.assign_code(VerificationCode::with_code(code, Utc::now(), 10));
    repo.insert(user).await;
    repo
}

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockUserRepository::new();
    let user = User::new("user@x.com");

    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.id, user.id);

    let found = repo.find_by_email("user@x.com").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_email("other@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_repository_duplicate_email() {
    let repo = MockUserRepository::new();
    repo.create(User::new("user@x.com")).await.unwrap();

    let result = repo.create(User::new("user@x.com")).await;
    assert!(matches!(result, Err(DomainError::AlreadyExists { .. })));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_save_code_requires_existing_user() {
    let repo = MockUserRepository::new();
    let code = VerificationCode::with_code("482913", Utc::now(), 10);

    let result = repo.save_verification_code("ghost@x.com", &code).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_consume_is_single_use() {
    let repo = seeded_repo("482913").await;
    let now = Utc::now();

    let first = repo
        .consume_verification_code("user@x.com", "482913", now)
        .await
        .unwrap();
    assert!(first.unwrap().is_verified());

    let second = repo
        .consume_verification_code("user@x.com", "482913", now)
        .await
        .unwrap();
    assert!(second.is_none());
}

#[tokio::test]
async fn test_consume_rejects_expired_code() {
    let repo = seeded_repo("482913").await;
    let later = Utc::now() + Duration::minutes(11);

    let result = repo
        .consume_verification_code("user@x.com", "482913", later)
        .await
        .unwrap();
    assert!(result.is_none());
    assert!(!repo.get("user@x.com").await.unwrap().is_verified());
}

#[tokio::test]
async fn test_concurrent_consume_has_one_winner() {
    let repo = Arc::new(seeded_repo("482913").await);
    let now = Utc::now();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.consume_verification_code("user@x.com", "482913", now)
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap().is_some() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}

#[tokio::test]
async fn test_clear_only_removes_matching_code() {
    let repo = seeded_repo("482913").await;

    assert!(!repo.clear_verification_code("user@x.com", "111111").await.unwrap());
    assert!(repo.get("user@x.com").await.unwrap().verification_code.is_some());

    assert!(repo.clear_verification_code("user@x.com", "482913").await.unwrap());
    assert!(repo.get("user@x.com").await.unwrap().verification_code.is_none());
}

#[tokio::test]
async fn test_unavailable_store_fails_every_call() {
    let repo = seeded_repo("482913").await;
    repo.set_unavailable(true);

    let result = repo.find_by_email("user@x.com").await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
    assert!(repo.ping().await.is_err());

    repo.set_unavailable(false);
    assert!(repo.find_by_email("user@x.com").await.unwrap().is_some());
}
