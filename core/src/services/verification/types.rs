//! Types for verification service results

use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::VerificationCode;

/// Result of issuing and dispatching a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// Normalized email the code was sent to
    pub email: String,
    /// The code that was issued
    pub verification_code: VerificationCode,
    /// The message ID from the notifier
    pub message_id: String,
}

impl SendCodeResult {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.verification_code.expires_at
    }
}

/// Result of a successful confirmation
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// The user, now verified
    pub user: User,
    pub verified_at: DateTime<Utc>,
}
