//! Shared utilities and common types for the Radar backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error codes and the response envelope
//! - Utility functions (email validation and masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig, ServerConfig,
    VerificationConfig,
};
pub use errors::error_codes;
pub use types::{ApiResponse, ErrorDetail, HealthResponse, HealthStatus};
pub use utils::email;
