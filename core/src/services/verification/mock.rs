//! Recording notifier for tests and local runs

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::traits::NotifierTrait;

/// A dispatched code as seen by the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentCode {
    pub email: String,
    pub code: String,
    pub message_id: String,
}

/// Notifier that records every send, with failure and latency injection
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<SentCode>>>,
    should_fail: AtomicBool,
    latency_ms: AtomicU64,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: AtomicBool::new(false),
            latency_ms: AtomicU64::new(0),
        }
    }

    /// A notifier that rejects every send
    pub fn failing() -> Self {
        let notifier = Self::new();
        notifier.set_should_fail(true);
        notifier
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    /// Most recent code delivered to `email`
    pub async fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .await
            .iter()
            .rev()
            .find(|s| s.email == email)
            .map(|s| s.code.clone())
    }

    pub async fn sent(&self) -> Vec<SentCode> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotifierTrait for MockNotifier {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        _expires_in_minutes: i64,
    ) -> Result<String, String> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Mock notifier error".to_string());
        }

        let message_id = format!("mock-msg-{}", uuid::Uuid::new_v4());
        self.sent.lock().await.push(SentCode {
            email: email.to_string(),
            code: code.to_string(),
            message_id: message_id.clone(),
        });
        Ok(message_id)
    }
}
