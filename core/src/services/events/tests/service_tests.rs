//! Unit tests for event service

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::event::{AudienceSex, Event, NewEvent};
use crate::domain::value_objects::event_filter::EventFilterCriteria;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::event::MockEventRepository;
use crate::services::events::EventService;

fn new_event(name: &str, sex: AudienceSex, campus_only: bool, free: bool) -> NewEvent {
    NewEvent {
        event_name: name.to_string(),
        organizer_name: "Radar Club".to_string(),
        sex,
        campus_only,
        free,
        ..Default::default()
    }
}

/// {any,campus,free}, {female,!campus,free}, {any,!campus,paid}
async fn seeded_service() -> (EventService<MockEventRepository>, Arc<MockEventRepository>) {
    let repo = Arc::new(MockEventRepository::new());
    let service = EventService::new(repo.clone());
    for event in [
        new_event("Tech Talk", AudienceSex::Any, true, true),
        new_event("Women in STEM", AudienceSex::Female, false, true),
        new_event("Gala Night", AudienceSex::Any, false, false),
    ] {
        service.create_event(event).await.unwrap();
    }
    (service, repo)
}

fn names(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.event_name.as_str()).collect()
}

#[tokio::test]
async fn test_filter_free_returns_first_two_in_order() {
    let (service, _repo) = seeded_service().await;

    let events = service
        .filter(&EventFilterCriteria::unconstrained().with_free(true))
        .await
        .unwrap();
    assert_eq!(names(&events), vec!["Tech Talk", "Women in STEM"]);
}

#[tokio::test]
async fn test_unconstrained_filter_equals_all_events() {
    let (service, _repo) = seeded_service().await;

    let all = service.all_events().await.unwrap();
    let filtered = service
        .filter(&EventFilterCriteria::unconstrained())
        .await
        .unwrap();
    assert_eq!(all, filtered);
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_single_criterion_is_exact_subset() {
    let (service, _repo) = seeded_service().await;
    let all = service.all_events().await.unwrap();

    let criteria = [
        EventFilterCriteria::unconstrained().with_sex(AudienceSex::Female),
        EventFilterCriteria::unconstrained().with_sex(AudienceSex::Any),
        EventFilterCriteria::unconstrained().with_campus_only(true),
        EventFilterCriteria::unconstrained().with_campus_only(false),
        EventFilterCriteria::unconstrained().with_free(false),
    ];
    for criterion in criteria {
        let expected: Vec<Event> = all.iter().filter(|e| criterion.matches(e)).cloned().collect();
        let actual = service.filter(&criterion).await.unwrap();
        assert_eq!(actual, expected, "criterion {:?}", criterion);
    }
}

#[tokio::test]
async fn test_combined_criteria_are_anded() {
    let (service, _repo) = seeded_service().await;

    let events = service
        .filter(
            &EventFilterCriteria::unconstrained()
                .with_campus_only(false)
                .with_free(true),
        )
        .await
        .unwrap();
    assert_eq!(names(&events), vec!["Women in STEM"]);
}

#[tokio::test]
async fn test_no_match_is_empty_not_error() {
    let (service, _repo) = seeded_service().await;

    let events = service
        .filter(&EventFilterCriteria::unconstrained().with_sex(AudienceSex::Male))
        .await
        .unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_create_event_requires_name() {
    let repo = Arc::new(MockEventRepository::new());
    let service = EventService::new(repo.clone());

    let result = service
        .create_event(new_event("  ", AudienceSex::Any, false, true))
        .await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation(ValidationError::required("event_name"))
    );
    assert!(repo.all().await.is_empty());
}

#[tokio::test]
async fn test_store_unavailable_is_propagated() {
    let (service, repo) = seeded_service().await;
    repo.set_unavailable(true);

    let result = service.all_events().await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_slow_store_hits_deadline() {
    let repo = Arc::new(MockEventRepository::new());
    repo.set_latency(Duration::from_secs(30));
    let service = EventService::new(repo).with_store_timeout(Duration::from_millis(100));

    let result = service.all_events().await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
}
