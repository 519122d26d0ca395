//! Question intake for events

mod service;


pub use service::QuestionService;
