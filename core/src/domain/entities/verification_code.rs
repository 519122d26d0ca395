//! Verification code entity for email-based account verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Default number of digits in a code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// Why a submitted code was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRejection {
    Malformed,
    Mismatch,
    Consumed,
    Expired,
}

impl CodeRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeRejection::Malformed => "malformed",
            CodeRejection::Mismatch => "mismatch",
            CodeRejection::Consumed => "consumed",
            CodeRejection::Expired => "expired",
        }
    }
}

/// A short numeric secret bound to one user at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// The numeric code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully used
    pub consumed: bool,
}

impl VerificationCode {
    /// Issues a fresh code of `length` digits valid for `ttl_minutes`
    pub fn issue(length: usize, ttl_minutes: i64) -> Self {
        Self::with_code(Self::generate_code(length), Utc::now(), ttl_minutes)
    }

    /// Builds a code with a known value, mainly for seeding and tests
    pub fn with_code(code: impl Into<String>, issued_at: DateTime<Utc>, ttl_minutes: i64) -> Self {
        Self {
            code: code.into(),
            issued_at,
            expires_at: issued_at + Duration::minutes(ttl_minutes),
            consumed: false,
        }
    }

    /// Generates `length` uniformly random digits from the OS CSPRNG
    pub fn generate_code(length: usize) -> String {
        (0..length)
            .map(|_| char::from(b'0' + OsRng.gen_range(0..10u8)))
            .collect()
    }

    /// Checks that input is exactly `length` ASCII digits
    pub fn is_well_formed(input: &str, length: usize) -> bool {
        input.len() == length && input.bytes().all(|b| b.is_ascii_digit())
    }

    /// Rejects input that could never be a code of `length` digits
    pub fn check_format(input: &str, length: usize) -> Result<(), CodeRejection> {
        if Self::is_well_formed(input, length) {
            Ok(())
        } else {
            Err(CodeRejection::Malformed)
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Active means unconsumed and unexpired
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.consumed && !self.is_expired_at(now)
    }

    /// Constant-time comparison against the stored value
    pub fn matches(&self, input: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), input.as_bytes())
    }

    /// Decides whether `input` would be accepted at `now`.
    ///
    /// The comparison always runs so that timing does not reveal whether the
    /// code was expired or consumed.
    pub fn check(&self, input: &str, now: DateTime<Utc>) -> Result<(), CodeRejection> {
        let matched = self.matches(input);
        if self.consumed {
            Err(CodeRejection::Consumed)
        } else if self.is_expired_at(now) {
            Err(CodeRejection::Expired)
        } else if !matched {
            Err(CodeRejection::Mismatch)
        } else {
            Ok(())
        }
    }
}
