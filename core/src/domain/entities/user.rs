//! User entity representing a registered account in Radar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::verification_code::VerificationCode;

/// Whether the user's email address has been confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Unverified,
    Verified,
}

/// User entity, keyed by email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Normalized email address (unique)
    pub email: String,

    /// Verification status
    pub status: VerificationStatus,

    /// Most recently issued code, if any
    #[serde(skip_serializing)]
    pub verification_code: Option<VerificationCode>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new unverified user
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            status: VerificationStatus::Unverified,
            verification_code: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }

    /// Replaces any existing code; the old one stops being valid immediately
    pub fn assign_code(&mut self, code: VerificationCode) {
        self.updated_at = code.issued_at;
        self.verification_code = Some(code);
    }

    /// The code that could still be accepted at `now`
    pub fn active_code(&self, now: DateTime<Utc>) -> Option<&VerificationCode> {
        self.verification_code
            .as_ref()
            .filter(|code| code.is_active_at(now))
    }

    /// Marks the active code consumed and the user verified
    pub fn mark_verified(&mut self, now: DateTime<Utc>) {
        if let Some(code) = self.verification_code.as_mut() {
            code.consumed = true;
        }
        self.status = VerificationStatus::Verified;
        self.updated_at = now;
    }
}
