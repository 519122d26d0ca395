//! Question entity: an attendee question about an event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Maximum length of a question
pub const MAX_QUESTION_LENGTH: usize = 2000;

/// Question as stored; immutable after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub question: String,
    /// Display name of the asker, if given
    pub user_name: Option<String>,
    pub event_name: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied question; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSubmission {
    pub question: Option<String>,
    pub user_name: Option<String>,
    pub event_name: Option<String>,
}

impl QuestionSubmission {
    pub fn new(question: impl Into<String>, event_name: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            user_name: None,
            event_name: Some(event_name.into()),
        }
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    /// Trimmed event name, if one was given
    pub fn target_event(&self) -> Option<&str> {
        self.event_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Validates the submission; whitespace-only text counts as empty
    pub fn into_question(self) -> Result<Question, ValidationError> {
        let question = self
            .question
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ValidationError::required("question"))?;
        if question.chars().count() > MAX_QUESTION_LENGTH {
            return Err(ValidationError::TooLong {
                field: "question".to_string(),
                max: MAX_QUESTION_LENGTH,
            });
        }

        let event_name = self
            .target_event()
            .ok_or_else(|| ValidationError::required("event_name"))?
            .to_string();

        let user_name = self
            .user_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from);

        Ok(Question {
            id: Uuid::new_v4(),
            question: question.to_string(),
            user_name,
            event_name,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_question_success() {
        let question = QuestionSubmission::new(" Is parking available? ", "Hackathon")
            .with_user_name("Asha")
            .into_question()
            .unwrap();

        assert_eq!(question.question, "Is parking available?");
        assert_eq!(question.event_name, "Hackathon");
        assert_eq!(question.user_name.as_deref(), Some("Asha"));
    }

    #[test]
    fn test_empty_or_absent_text_is_rejected() {
        for text in [None, Some(""), Some("   \n\t")] {
            let submission = QuestionSubmission {
                question: text.map(String::from),
                user_name: None,
                event_name: Some("Hackathon".to_string()),
            };
            assert_eq!(
                submission.into_question().unwrap_err(),
                ValidationError::required("question")
            );
        }
    }

    #[test]
    fn test_event_name_is_required() {
        let submission = QuestionSubmission {
            question: Some("When?".to_string()),
            user_name: None,
            event_name: Some("  ".to_string()),
        };
        assert_eq!(
            submission.into_question().unwrap_err(),
            ValidationError::required("event_name")
        );
    }

    #[test]
    fn test_blank_user_name_becomes_none() {
        let question = QuestionSubmission::new("When?", "Hackathon")
            .with_user_name(" ")
            .into_question()
            .unwrap();
        assert_eq!(question.user_name, None);
    }
}
