//! Email Service Interface
//!
//! Defines the trait for email providers that deliver verification codes.

use async_trait::async_trait;
use serde::Serialize;

use crate::InfrastructureError;

/// Outgoing email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    /// The standard verification email for `code`
    pub fn verification(to: &str, code: &str, expires_in_minutes: i64) -> Self {
        Self {
            to: to.to_string(),
            subject: "Your Radar verification code".to_string(),
            body: format!(
                "Your Radar verification code is {}. It expires in {} minutes.\n\
                 If you did not request this code, you can ignore this email.",
                code, expires_in_minutes
            ),
        }
    }
}

/// Email provider
///
/// Implementations include:
/// - HTTP email API
/// - Logging implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError>;

    /// Send a verification code using the standard message format
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        expires_in_minutes: i64,
    ) -> Result<String, InfrastructureError> {
        let message = EmailMessage::verification(email, code, expires_in_minutes);
        self.send_email(&message).await
    }

    /// Provider name for logs ("http", "mock")
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_message_contains_code_and_expiry() {
        let message = EmailMessage::verification("user@x.com", "482913", 10);
        assert_eq!(message.to, "user@x.com");
        assert!(message.subject.contains("verification code"));
        assert!(message.body.contains("482913"));
        assert!(message.body.contains("10 minutes"));
    }
}
