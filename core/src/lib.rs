//! # Radar Core
//!
//! Core business logic and domain layer for the Radar backend.
//! This crate contains domain entities, business services, repository interfaces
//! (with in-memory implementations for tests), and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AudienceSex, Event, NewEvent, Question, QuestionSubmission, User, VerificationCode,
    VerificationStatus,
};
pub use domain::value_objects::{EventFilterCriteria, EventQueryPlan};
pub use errors::{DomainError, DomainResult, ValidationError};
pub use repositories::{
    EventRepository, MockEventRepository, MockQuestionRepository, MockUserRepository,
    QuestionRepository, UserRepository,
};
pub use services::{
    EventService, MockNotifier, NotifierTrait, QuestionService, UserService, VerificationService,
    VerificationServiceConfig,
};
