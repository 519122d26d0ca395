//! Question repository trait.

use async_trait::async_trait;

use crate::domain::entities::question::Question;
use crate::errors::DomainError;

/// Repository trait for Question persistence
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist a question and return the stored record
    async fn insert(&self, question: Question) -> Result<Question, DomainError>;

    /// Questions for an event, in creation order
    async fn find_by_event(&self, event_name: &str) -> Result<Vec<Question>, DomainError>;
}
