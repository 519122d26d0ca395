//! Domain entities representing core business objects.

pub mod event;
pub mod question;
pub mod user;
pub mod verification_code;

// Re-export commonly used types
pub use event::{AudienceSex, Event, NewEvent, MAX_NAME_LENGTH};
pub use question::{Question, QuestionSubmission, MAX_QUESTION_LENGTH};
pub use user::{User, VerificationStatus};
pub use verification_code::{
    CodeRejection, VerificationCode, DEFAULT_CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES,
};
