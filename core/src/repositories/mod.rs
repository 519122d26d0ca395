pub mod event;
pub mod fault;
pub mod question;
pub mod user;

pub use event::{EventRepository, MockEventRepository};
pub use fault::FaultInjector;
pub use question::{MockQuestionRepository, QuestionRepository};
pub use user::{MockUserRepository, UserRepository};
