//! Unit tests for user registration

use std::sync::Arc;

use crate::errors::{DomainError, ValidationError};
use crate::repositories::user::MockUserRepository;
use crate::services::users::UserService;

#[tokio::test]
async fn test_register_creates_unverified_user() {
    let repo = Arc::new(MockUserRepository::new());
    let service = UserService::new(repo.clone());

    let user = service.register(" New.User@X.com ").await.unwrap();
    assert_eq!(user.email, "new.user@x.com");
    assert!(!user.is_verified());
    assert!(repo.get("new.user@x.com").await.is_some());
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let repo = Arc::new(MockUserRepository::new());
    let service = UserService::new(repo.clone());

    let result = service.register("not-an-email").await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation(ValidationError::InvalidEmail)
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_register_twice_is_already_exists() {
    let service = UserService::new(Arc::new(MockUserRepository::new()));

    service.register("user@x.com").await.unwrap();
    let result = service.register("USER@x.com").await;
    assert!(matches!(result, Err(DomainError::AlreadyExists { .. })));
}

#[tokio::test]
async fn test_store_health_reflects_repository() {
    let repo = Arc::new(MockUserRepository::new());
    let service = UserService::new(repo.clone());
    assert!(service.store_health().await.is_ok());

    repo.set_unavailable(true);
    assert!(matches!(
        service.store_health().await,
        Err(DomainError::StoreUnavailable { .. })
    ));
}
