//! User registration service

use std::sync::Arc;
use std::time::Duration;

use radar_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::user::User;
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::user::UserRepository;
use crate::services::deadline::{within_store_deadline, DEFAULT_STORE_TIMEOUT};

/// Creates users on first contact
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
    store_timeout: Duration,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self {
            user_repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Register an unverified user
    ///
    /// Fails with `Validation` for a malformed address and `AlreadyExists`
    /// when the email is taken.
    pub async fn register(&self, email: &str) -> DomainResult<User> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        let email = normalize_email(email);

        let user = within_store_deadline(
            self.store_timeout,
            "create_user",
            self.user_repository.create(User::new(email)),
        )
        .await?;

        tracing::info!(
            email = %mask_email(&user.email),
            user_id = %user.id,
            event = "user_registered",
            "Registered user"
        );
        Ok(user)
    }

    /// Whether the user store answers
    pub async fn store_health(&self) -> DomainResult<()> {
        within_store_deadline(self.store_timeout, "ping", self.user_repository.ping()).await
    }
}
