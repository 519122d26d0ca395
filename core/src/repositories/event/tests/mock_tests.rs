//! Unit tests for mock event repository

use crate::domain::entities::event::{AudienceSex, NewEvent};
use crate::domain::value_objects::event_filter::{EventFilterCriteria, EventQueryPlan};
use crate::errors::DomainError;
use crate::repositories::event::{EventRepository, MockEventRepository};

fn new_event(name: &str, free: bool) -> NewEvent {
    NewEvent {
        event_name: name.to_string(),
        organizer_name: "Club".to_string(),
        sex: AudienceSex::Any,
        campus_only: false,
        free,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_query_preserves_insertion_order() {
    let repo = MockEventRepository::new();
    for name in ["first", "second", "third"] {
        repo.insert(new_event(name, true).into_event().unwrap())
            .await
            .unwrap();
    }

    let names: Vec<String> = repo
        .query(&EventQueryPlan::all())
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.event_name)
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_query_applies_plan() {
    let repo = MockEventRepository::new();
    repo.insert(new_event("free", true).into_event().unwrap()).await.unwrap();
    repo.insert(new_event("paid", false).into_event().unwrap()).await.unwrap();

    let plan = EventQueryPlan::from_criteria(&EventFilterCriteria::unconstrained().with_free(false));
    let events = repo.query(&plan).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_name, "paid");
}

#[tokio::test]
async fn test_find_by_name_returns_earliest() {
    let repo = MockEventRepository::new();
    let first = repo.insert(new_event("Expo", true).into_event().unwrap()).await.unwrap();
    repo.insert(new_event("Expo", false).into_event().unwrap()).await.unwrap();

    let found = repo.find_by_name("Expo").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
    assert!(repo.find_by_name("expo").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unavailable_store() {
    let repo = MockEventRepository::new();
    repo.set_unavailable(true);

    let result = repo.query(&EventQueryPlan::all()).await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
}
