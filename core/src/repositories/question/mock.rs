//! In-memory implementation of QuestionRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::question::Question;
use crate::errors::DomainError;
use crate::repositories::fault::FaultInjector;

use super::trait_::QuestionRepository;

pub struct MockQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
    faults: FaultInjector,
}

impl MockQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(Vec::new())),
            faults: FaultInjector::default(),
        }
    }

    pub async fn all(&self) -> Vec<Question> {
        self.questions.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.questions.read().await.is_empty()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.faults.set_unavailable(unavailable);
    }
}

impl Default for MockQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for MockQuestionRepository {
    async fn insert(&self, question: Question) -> Result<Question, DomainError> {
        self.faults.before("insert_question").await?;
        self.questions.write().await.push(question.clone());
        Ok(question)
    }

    async fn find_by_event(&self, event_name: &str) -> Result<Vec<Question>, DomainError> {
        self.faults.before("find_questions_by_event").await?;
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .filter(|q| q.event_name == event_name)
            .cloned()
            .collect())
    }
}
