//! Failure and latency injection for the in-memory repositories

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crate::errors::{DomainError, DomainResult};

/// Shared switchboard used by the mock repositories to simulate an
/// unreachable or slow store
#[derive(Debug, Default)]
pub struct FaultInjector {
    unavailable: AtomicBool,
    latency_ms: AtomicU64,
}

impl FaultInjector {
    /// Make every subsequent call fail with `StoreUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Delay every subsequent call
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    /// Applies the configured latency, then the configured failure
    pub async fn before(&self, operation: &str) -> DomainResult<()> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::store_unavailable(format!(
                "{}: store is unavailable",
                operation
            )));
        }
        Ok(())
    }
}
