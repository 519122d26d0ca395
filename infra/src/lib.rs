//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the Radar core depends on:
//!
//! - **Database**: PostgreSQL repositories using SQLx, plus the connection pool
//!   and embedded migrations
//! - **Notifier**: email delivery of verification codes, either logged (for
//!   development) or posted to an HTTP email API
//!
//! ## Features
//!
//! - `postgres`: PostgreSQL store (default)
//! - `http-notifier`: HTTP email API notifier (default)

/// Database module - PostgreSQL implementations using SQLx
#[cfg(feature = "postgres")]
pub mod database;

/// Notifier module - verification code delivery
pub mod notifier;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration for infrastructure services
    //!
    //! Database settings come from the shared config crate; notifier settings
    //! are local to this crate.

    use serde::{Deserialize, Serialize};

    pub use radar_shared::config::DatabaseConfig;

    /// Default HTTP timeout for email API requests, in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    /// Notifier configuration
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct NotifierConfig {
        /// Notifier provider ("mock" or "http")
        pub provider: String,
        /// Email API endpoint used by the http provider
        pub api_url: String,
        /// Bearer token for the email API
        #[serde(skip_serializing)]
        pub api_key: String,
        /// Sender address on outgoing mail
        pub from_address: String,
        /// Per-request timeout in seconds
        pub request_timeout_secs: u64,
    }

    impl Default for NotifierConfig {
        fn default() -> Self {
            Self {
                provider: "mock".to_string(),
                api_url: String::new(),
                api_key: String::new(),
                from_address: "no-reply@radar.local".to_string(),
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            }
        }
    }

    impl NotifierConfig {
        /// Load notifier settings from `NOTIFIER_*` environment variables
        pub fn from_env() -> Self {
            let defaults = Self::default();
            Self {
                provider: std::env::var("NOTIFIER_PROVIDER")
                    .map(|v| v.trim().to_lowercase())
                    .unwrap_or(defaults.provider),
                api_url: std::env::var("NOTIFIER_API_URL").unwrap_or_default(),
                api_key: std::env::var("NOTIFIER_API_KEY").unwrap_or_default(),
                from_address: std::env::var("NOTIFIER_FROM_ADDRESS")
                    .unwrap_or(defaults.from_address),
                request_timeout_secs: std::env::var("NOTIFIER_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.request_timeout_secs),
            }
        }

        /// Settings for the logging notifier
        pub fn mock() -> Self {
            Self::default()
        }

        /// Settings for an HTTP email API
        pub fn http(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
            Self {
                provider: "http".to_string(),
                api_url: api_url.into(),
                api_key: api_key.into(),
                ..Self::default()
            }
        }
    }

}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Notifier delivery error
    #[error("Notifier error: {0}")]
    Notifier(String),
}
