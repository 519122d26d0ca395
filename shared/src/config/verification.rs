//! Verification code policy

use serde::{Deserialize, Serialize};

use super::env_parse;

/// Shortest accepted code length
pub const MIN_CODE_LENGTH: usize = 4;
/// Longest accepted code length
pub const MAX_CODE_LENGTH: usize = 10;

/// Verification code policy and collaborator deadlines
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of digits in an issued code
    pub code_length: usize,

    /// Minutes until an issued code expires
    pub code_ttl_minutes: i64,

    /// Deadline for a single notifier dispatch, in seconds
    pub notifier_timeout_secs: u64,

    /// Deadline for a single store call, in seconds
    pub store_timeout_secs: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            code_ttl_minutes: 10,
            notifier_timeout_secs: 10,
            store_timeout_secs: 5,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables.
    ///
    /// Out-of-range lengths and non-positive durations fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_length: env_parse("VERIFICATION_CODE_LENGTH", defaults.code_length),
            code_ttl_minutes: env_parse("VERIFICATION_CODE_TTL_MINUTES", defaults.code_ttl_minutes),
            notifier_timeout_secs: env_parse("NOTIFIER_TIMEOUT_SECS", defaults.notifier_timeout_secs),
            store_timeout_secs: env_parse("STORE_TIMEOUT_SECS", defaults.store_timeout_secs),
        }
        .sanitized()
    }

    /// Replace invalid values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            self.code_length = defaults.code_length;
        }
        if self.code_ttl_minutes <= 0 {
            self.code_ttl_minutes = defaults.code_ttl_minutes;
        }
        if self.notifier_timeout_secs == 0 {
            self.notifier_timeout_secs = defaults.notifier_timeout_secs;
        }
        if self.store_timeout_secs == 0 {
            self.store_timeout_secs = defaults.store_timeout_secs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_length, 6);
        assert_eq!(config.code_ttl_minutes, 10);
    }

    #[test]
    fn test_sanitized_rejects_out_of_range_length() {
        let config = VerificationConfig {
            code_length: 3,
            code_ttl_minutes: -1,
            notifier_timeout_secs: 0,
            store_timeout_secs: 2,
        }
        .sanitized();

        assert_eq!(config.code_length, 6);
        assert_eq!(config.code_ttl_minutes, 10);
        assert_eq!(config.notifier_timeout_secs, 10);
        assert_eq!(config.store_timeout_secs, 2);
    }

    #[test]
    fn test_sanitized_keeps_valid_length() {
        let config = VerificationConfig {
            code_length: 8,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.code_length, 8);
    }
}
