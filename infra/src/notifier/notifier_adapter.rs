//! Adapter from an email provider to the core notifier trait

use async_trait::async_trait;
use radar_core::NotifierTrait;

use super::email_service::EmailService;

/// Delivers verification codes through any `EmailService`
pub struct EmailNotifier {
    inner: Box<dyn EmailService>,
}

impl EmailNotifier {
    pub fn new(inner: Box<dyn EmailService>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl NotifierTrait for EmailNotifier {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        expires_in_minutes: i64,
    ) -> Result<String, String> {
        self.inner
            .send_verification_code(email, code, expires_in_minutes)
            .await
            .map_err(|e| e.to_string())
    }
}
