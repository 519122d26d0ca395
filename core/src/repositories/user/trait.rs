//! User repository trait defining the interface for user persistence.
//!
//! Verification state lives on the user row, so issuing and consuming codes
//! are repository operations. Each mutating call is a single conditional
//! write in the store; callers never read-modify-write a user.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Emails passed in are expected to be normalized already.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError::StoreUnavailable)` - Store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// Fails with `AlreadyExists` if the email is taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite the user's code slot with `code`
    ///
    /// Only the code columns are written, so a concurrent confirmation of the
    /// previous code can never be undone by this call. Fails with `NotFound`
    /// if the user does not exist.
    async fn save_verification_code(
        &self,
        email: &str,
        code: &VerificationCode,
    ) -> Result<(), DomainError>;

    /// Atomically consume `code` and mark the user verified
    ///
    /// Succeeds only if `code` is the user's current code, unconsumed, and
    /// unexpired at `now`. Of two concurrent calls with the same code at most
    /// one returns `Some`.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The updated, verified user
    /// * `Ok(None)` - The conditional update matched nothing
    async fn consume_verification_code(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DomainError>;

    /// Clear the code slot if it still holds an unconsumed `code`
    ///
    /// # Returns
    /// * `Ok(true)` - The code was revoked
    /// * `Ok(false)` - A newer code or a consumption got there first
    async fn clear_verification_code(&self, email: &str, code: &str) -> Result<bool, DomainError>;

    /// Cheap reachability check for health checks
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
