//! PostgreSQL repository implementations

mod event_query;
pub mod event_repository_impl;
pub mod question_repository_impl;
pub mod user_repository_impl;

pub use event_repository_impl::PostgresEventRepository;
pub use question_repository_impl::PostgresQuestionRepository;
pub use user_repository_impl::PostgresUserRepository;

use radar_core::DomainError;

/// Maps an SQLx failure to `StoreUnavailable`, logging the cause
pub(crate) fn store_error(operation: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |err: sqlx::Error| {
        tracing::error!(operation, error = %err, "Database operation failed");
        DomainError::store_unavailable(format!("{} failed: {}", operation, err))
    }
}
