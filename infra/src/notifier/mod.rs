//! Notifier Module
//!
//! Email delivery of verification codes. A logging provider serves
//! development; the HTTP provider talks to a transactional email API.

pub mod email_service;
#[cfg(feature = "http-notifier")]
pub mod http_email;
pub mod log_email;
pub mod notifier_adapter;

pub use email_service::{EmailMessage, EmailService};
#[cfg(feature = "http-notifier")]
pub use http_email::HttpEmailService;
pub use log_email::LogEmailService;
pub use notifier_adapter::EmailNotifier;

use crate::config::NotifierConfig;
use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an email service for the configured provider
///
/// Unknown providers fall back to the logging service. A misconfigured
/// http provider is an error rather than a silent fallback.
pub fn create_email_service(
    config: &NotifierConfig,
) -> Result<Box<dyn EmailService>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" | "log" => Ok(Box::new(LogEmailService::new())),
        #[cfg(feature = "http-notifier")]
        "http" => Ok(Box::new(HttpEmailService::new(config)?)),
        other => {
            tracing::warn!(provider = other, "Unknown notifier provider, using mock");
            Ok(Box::new(LogEmailService::new()))
        }
    }
}

/// Create the notifier handed to the verification service
pub fn create_notifier(config: &NotifierConfig) -> Result<EmailNotifier, InfrastructureError> {
    let notifier = EmailNotifier::new(create_email_service(config)?);
    tracing::info!(provider = notifier.provider_name(), "Notifier configured");
    Ok(notifier)
}
