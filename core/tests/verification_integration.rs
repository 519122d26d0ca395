//! End-to-end account lifecycle against the in-memory stores

use std::sync::Arc;

use radar_core::domain::entities::question::QuestionSubmission;
use radar_core::{
    AudienceSex, DomainError, EventFilterCriteria, EventService, MockEventRepository,
    MockNotifier, MockQuestionRepository, MockUserRepository, NewEvent, QuestionService,
    UserService, VerificationService, VerificationServiceConfig,
};

#[tokio::test]
async fn test_register_request_confirm_lifecycle() {
    let users = Arc::new(MockUserRepository::new());
    let notifier = Arc::new(MockNotifier::new());
    let registration = UserService::new(users.clone());
    let verification =
        VerificationService::new(users.clone(), notifier.clone(), VerificationServiceConfig::default());

    // Unknown users cannot request a code
    assert!(matches!(
        verification.request_verification("asha@cusat.ac.in").await,
        Err(DomainError::NotFound { .. })
    ));

    registration.register("Asha@cusat.ac.in").await.unwrap();
    verification
        .request_verification("asha@cusat.ac.in")
        .await
        .unwrap();

    let code = notifier.last_code_for("asha@cusat.ac.in").await.unwrap();
    let result = verification
        .confirm_verification("asha@cusat.ac.in", &code)
        .await
        .unwrap();
    assert!(result.user.is_verified());

    assert_eq!(
        verification
            .confirm_verification("asha@cusat.ac.in", &code)
            .await
            .unwrap_err(),
        DomainError::InvalidCode
    );
}

#[tokio::test]
async fn test_events_and_questions_share_the_catalogue() {
    let events = Arc::new(MockEventRepository::new());
    let questions = Arc::new(MockQuestionRepository::new());
    let event_service = EventService::new(events.clone());
    let question_service = QuestionService::new(questions, events);

    event_service
        .create_event(NewEvent {
            event_name: "Dhishna".to_string(),
            organizer_name: "SOE".to_string(),
            sex: AudienceSex::Any,
            campus_only: false,
            free: true,
            ..Default::default()
        })
        .await
        .unwrap();

    let free = event_service
        .filter(&EventFilterCriteria::unconstrained().with_free(true))
        .await
        .unwrap();
    assert_eq!(free.len(), 1);

    question_service
        .submit(QuestionSubmission::new("Is entry free for alumni?", "Dhishna"))
        .await
        .unwrap();
    let asked = question_service.questions_for_event("Dhishna").await.unwrap();
    assert_eq!(asked.len(), 1);
    assert_eq!(asked[0].user_name, None);
}
