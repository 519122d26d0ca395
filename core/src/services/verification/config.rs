//! Configuration for the verification service

use std::time::Duration;

use radar_shared::config::VerificationConfig;

use crate::domain::entities::verification_code::{DEFAULT_CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
use crate::services::deadline::DEFAULT_STORE_TIMEOUT;

/// Configuration for the verification service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationServiceConfig {
    /// Number of digits in an issued code
    pub code_length: usize,
    /// Number of minutes before a verification code expires
    pub code_expiration_minutes: i64,
    /// Deadline for a notifier dispatch; elapsing counts as a delivery failure
    pub notifier_timeout: Duration,
    /// Deadline for each store call
    pub store_timeout: Duration,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            notifier_timeout: Duration::from_secs(10),
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        let config = config.clone().sanitized();
        Self {
            code_length: config.code_length,
            code_expiration_minutes: config.code_ttl_minutes,
            notifier_timeout: Duration::from_secs(config.notifier_timeout_secs),
            store_timeout: Duration::from_secs(config.store_timeout_secs),
        }
    }
}
