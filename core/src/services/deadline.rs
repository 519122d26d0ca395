//! Deadlines for store calls

use std::future::Future;
use std::time::Duration;

use crate::errors::{DomainError, DomainResult};

/// Default deadline for a single store call
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs a store call, turning an elapsed deadline into `StoreUnavailable`
pub(crate) async fn within_store_deadline<T, F>(
    limit: Duration,
    operation: &'static str,
    call: F,
) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(
                operation = operation,
                timeout_ms = limit.as_millis() as u64,
                event = "store_timeout",
                "Store call exceeded its deadline"
            );
            Err(DomainError::store_unavailable(format!(
                "{} timed out after {}ms",
                operation,
                limit.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completed_call_passes_through() {
        let result = within_store_deadline(Duration::from_secs(1), "noop", async { Ok(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let result: DomainResult<()> = within_store_deadline(Duration::from_secs(1), "noop", async {
            Err(DomainError::not_found("user"))
        })
        .await;
        assert_eq!(result, Err(DomainError::not_found("user")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_deadline_is_store_unavailable() {
        let result: DomainResult<()> =
            within_store_deadline(Duration::from_millis(50), "slow_query", async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok(())
            })
            .await;

        match result {
            Err(DomainError::StoreUnavailable { message }) => {
                assert!(message.contains("slow_query"));
            }
            other => panic!("Expected StoreUnavailable, got {:?}", other),
        }
    }
}
