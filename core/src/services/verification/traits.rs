//! Trait for notifier integration

use async_trait::async_trait;

/// Delivers verification codes out of band (email in production)
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Send a verification code; returns the provider's message id
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        expires_in_minutes: i64,
    ) -> Result<String, String>;
}
