//! Logging email service for development and tests
//!
//! Nothing leaves the process; each message is written to the tracing log,
//! code included, so a developer can complete verification locally.

use async_trait::async_trait;
use radar_shared::utils::email::mask_email;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use super::email_service::{EmailMessage, EmailService};
use crate::InfrastructureError;

/// Email service that logs instead of sending
#[derive(Clone, Default)]
pub struct LogEmailService {
    message_count: Arc<AtomicU64>,
    simulate_failure: Arc<AtomicBool>,
}

impl LogEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of messages accepted
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Make subsequent sends fail
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmailService for LogEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let masked = mask_email(&message.to);

        if self.simulate_failure.load(Ordering::SeqCst) {
            tracing::warn!(provider = "mock", email = %masked, "Simulating email failure");
            return Err(InfrastructureError::Notifier(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::info!(
            target: "notifier",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            count,
            subject = %message.subject,
            body = %message.body,
            "Email logged"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
