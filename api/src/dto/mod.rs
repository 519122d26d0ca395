//! Request and response bodies

pub mod events;
pub mod questions;
pub mod users;
pub mod verification;

pub use events::{CreateEventRequest, EventFilterQuery};
pub use questions::AskQuestionRequest;
pub use users::{RegisterRequest, UserResponse};
pub use verification::{SendCodeResponse, VerificationQuery, VerifyCodeResponse};
