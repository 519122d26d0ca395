//! Question intake implementation

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::question::{Question, QuestionSubmission};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::event::EventRepository;
use crate::repositories::question::QuestionRepository;
use crate::services::deadline::{within_store_deadline, DEFAULT_STORE_TIMEOUT};

/// Accepts questions about existing events
///
/// Invalid submissions are rejected with a typed error and nothing is
/// persisted.
pub struct QuestionService<Q: QuestionRepository, E: EventRepository> {
    question_repository: Arc<Q>,
    event_repository: Arc<E>,
    store_timeout: Duration,
}

impl<Q: QuestionRepository, E: EventRepository> QuestionService<Q, E> {
    pub fn new(question_repository: Arc<Q>, event_repository: Arc<E>) -> Self {
        Self {
            question_repository,
            event_repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Validate and store a question
    ///
    /// Fails with `Validation` for empty text or a missing event name and
    /// with `NotFound` when the event does not exist.
    pub async fn submit(&self, submission: QuestionSubmission) -> DomainResult<Question> {
        let question = submission.into_question().map_err(|error| {
            tracing::info!(
                field = error.field(),
                event = "question_rejected",
                "Rejected question submission"
            );
            error
        })?;

        self.ensure_event_exists(&question.event_name).await?;

        let stored = within_store_deadline(
            self.store_timeout,
            "insert_question",
            self.question_repository.insert(question),
        )
        .await?;

        tracing::info!(
            question_id = %stored.id,
            event_name = %stored.event_name,
            anonymous = stored.user_name.is_none(),
            event = "question_submitted",
            "Stored question"
        );
        Ok(stored)
    }

    /// Questions asked about `event_name`, oldest first
    pub async fn questions_for_event(&self, event_name: &str) -> DomainResult<Vec<Question>> {
        let event_name = event_name.trim();
        if event_name.is_empty() {
            return Err(ValidationError::required("event_name").into());
        }

        self.ensure_event_exists(event_name).await?;

        within_store_deadline(
            self.store_timeout,
            "find_questions_by_event",
            self.question_repository.find_by_event(event_name),
        )
        .await
    }

    async fn ensure_event_exists(&self, event_name: &str) -> DomainResult<()> {
        let event = within_store_deadline(
            self.store_timeout,
            "find_event_by_name",
            self.event_repository.find_by_name(event_name),
        )
        .await?;

        match event {
            Some(_) => Ok(()),
            None => {
                tracing::info!(event_name = %event_name, event = "event_not_found", "Unknown event");
                Err(DomainError::not_found("event"))
            }
        }
    }
}
