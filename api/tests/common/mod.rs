//! Shared fixtures for route tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{dev::ServiceResponse, test, web};
use serde_json::Value;

use radar_api::AppState;
use radar_core::{MockEventRepository, MockNotifier, MockQuestionRepository, MockUserRepository};
use radar_shared::config::VerificationConfig;

pub type TestState =
    AppState<MockUserRepository, MockEventRepository, MockQuestionRepository, MockNotifier>;

/// In-memory stores and notifier behind a real app state
pub struct TestContext {
    pub users: Arc<MockUserRepository>,
    pub events: Arc<MockEventRepository>,
    pub questions: Arc<MockQuestionRepository>,
    pub notifier: Arc<MockNotifier>,
    pub state: web::Data<TestState>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let events = Arc::new(MockEventRepository::new());
        let questions = Arc::new(MockQuestionRepository::new());
        let notifier = Arc::new(MockNotifier::new());

        let state = web::Data::new(AppState::new(
            users.clone(),
            events.clone(),
            questions.clone(),
            notifier.clone(),
            &VerificationConfig::default(),
        ));

        Self {
            users,
            events,
            questions,
            notifier,
            state,
        }
    }
}

/// Build the full application over a context's state
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(radar_api::create_app(
            $ctx.state.clone(),
            &radar_shared::config::CorsConfig::development(),
            radar_api::DEFAULT_JSON_LIMIT,
        ))
        .await
    };
}

pub async fn body_json<B>(resp: ServiceResponse<B>) -> Value
where
    B: actix_web::body::MessageBody,
{
    test::read_body_json(resp).await
}
