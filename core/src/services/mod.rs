//! Business services containing domain logic and use cases.

pub mod deadline;
pub mod events;
pub mod questions;
pub mod users;
pub mod verification;

// Re-export commonly used types
pub use deadline::DEFAULT_STORE_TIMEOUT;
pub use events::EventService;
pub use questions::QuestionService;
pub use users::UserService;
pub use verification::{
    MockNotifier, NotifierTrait, SendCodeResult, VerificationService, VerificationServiceConfig,
    VerifyCodeResult,
};
