use serde::{Deserialize, Serialize};
use validator::Validate;

use radar_core::QuestionSubmission;

/// Body of `POST /api/v1/questions`
///
/// `User-Name` and `Event-Name` headers take precedence over the body fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AskQuestionRequest {
    #[serde(default, alias = "Question")]
    #[validate(length(max = 2000))]
    pub question: Option<String>,
    #[serde(default, alias = "User_name", alias = "UserName")]
    #[validate(length(max = 200))]
    pub user_name: Option<String>,
    #[serde(default, alias = "Event_name", alias = "EventName")]
    #[validate(length(max = 200))]
    pub event_name: Option<String>,
}

impl AskQuestionRequest {
    pub fn into_submission(
        self,
        user_name: Option<String>,
        event_name: Option<String>,
    ) -> QuestionSubmission {
        QuestionSubmission {
            question: self.question,
            user_name: user_name.or(self.user_name),
            event_name: event_name.or(self.event_name),
        }
    }
}
