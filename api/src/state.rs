//! Shared application state
//!
//! Services are built once at startup and shared across actix workers
//! through `web::Data`.

use std::sync::Arc;
use std::time::Duration;

use radar_core::{
    EventRepository, EventService, NotifierTrait, QuestionRepository, QuestionService,
    UserRepository, UserService, VerificationService, VerificationServiceConfig,
};
use radar_shared::config::VerificationConfig;

/// Application state that holds shared services
pub struct AppState<U, E, Q, N>
where
    U: UserRepository,
    E: EventRepository,
    Q: QuestionRepository,
    N: NotifierTrait,
{
    pub user_service: Arc<UserService<U>>,
    pub verification_service: Arc<VerificationService<U, N>>,
    pub event_service: Arc<EventService<E>>,
    pub question_service: Arc<QuestionService<Q, E>>,
}

impl<U, E, Q, N> AppState<U, E, Q, N>
where
    U: UserRepository,
    E: EventRepository,
    Q: QuestionRepository,
    N: NotifierTrait,
{
    /// Wire every service over the given stores and notifier
    pub fn new(
        users: Arc<U>,
        events: Arc<E>,
        questions: Arc<Q>,
        notifier: Arc<N>,
        config: &VerificationConfig,
    ) -> Self {
        let verification_config = VerificationServiceConfig::from(config);
        let store_timeout: Duration = verification_config.store_timeout;

        Self {
            user_service: Arc::new(UserService::new(users.clone()).with_store_timeout(store_timeout)),
            verification_service: Arc::new(VerificationService::new(
                users,
                notifier,
                verification_config,
            )),
            event_service: Arc::new(EventService::new(events.clone()).with_store_timeout(store_timeout)),
            question_service: Arc::new(
                QuestionService::new(questions, events).with_store_timeout(store_timeout),
            ),
        }
    }
}
