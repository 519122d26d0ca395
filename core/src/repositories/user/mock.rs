//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;
use crate::repositories::fault::FaultInjector;

use super::trait_::UserRepository;

/// Mock user repository keyed by email
///
/// Every mutation happens under the write lock, which gives the same
/// all-or-nothing behaviour as the conditional updates of the SQL store.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    faults: FaultInjector,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            faults: FaultInjector::default(),
        }
    }

    /// Seed a user directly, bypassing validation
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.email.clone(), user);
    }

    /// Read a user without going through the trait (and its fault injection)
    pub async fn get(&self, email: &str) -> Option<User> {
        self.users.read().await.get(email).cloned()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.faults.set_unavailable(unavailable);
    }

    pub fn set_latency(&self, latency: Duration) {
        self.faults.set_latency(latency);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.faults.before("find_user_by_email").await?;
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.faults.before("create_user").await?;
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(DomainError::AlreadyExists {
                resource: "user".to_string(),
            });
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn save_verification_code(
        &self,
        email: &str,
        code: &VerificationCode,
    ) -> Result<(), DomainError> {
        self.faults.before("save_verification_code").await?;
        let mut users = self.users.write().await;
        let user = users
            .get_mut(email)
            .ok_or_else(|| DomainError::not_found("user"))?;
        user.assign_code(code.clone());
        Ok(())
    }

    async fn consume_verification_code(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DomainError> {
        self.faults.before("consume_verification_code").await?;
        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(email) else {
            return Ok(None);
        };
        let accepted = user
            .verification_code
            .as_ref()
            .is_some_and(|current| current.check(code, now).is_ok());
        if !accepted {
            return Ok(None);
        }
        user.mark_verified(now);
        Ok(Some(user.clone()))
    }

    async fn clear_verification_code(&self, email: &str, code: &str) -> Result<bool, DomainError> {
        self.faults.before("clear_verification_code").await?;
        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(email) else {
            return Ok(false);
        };
        let still_current = user
            .verification_code
            .as_ref()
            .is_some_and(|current| !current.consumed && current.matches(code));
        if still_current {
            user.verification_code = None;
            user.updated_at = Utc::now();
        }
        Ok(still_current)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.faults.before("ping").await
    }
}
