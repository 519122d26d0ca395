//! Event service implementation

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::event::{Event, NewEvent};
use crate::domain::value_objects::event_filter::{EventFilterCriteria, EventQueryPlan};
use crate::errors::DomainResult;
use crate::repositories::event::EventRepository;
use crate::services::deadline::{within_store_deadline, DEFAULT_STORE_TIMEOUT};

/// Creates events and answers filtered listings
pub struct EventService<E: EventRepository> {
    event_repository: Arc<E>,
    store_timeout: Duration,
}

impl<E: EventRepository> EventService<E> {
    pub fn new(event_repository: Arc<E>) -> Self {
        Self {
            event_repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Validate and persist a new event
    pub async fn create_event(&self, new_event: NewEvent) -> DomainResult<Event> {
        let event = new_event.into_event()?;

        let stored = within_store_deadline(
            self.store_timeout,
            "insert_event",
            self.event_repository.insert(event),
        )
        .await?;

        tracing::info!(
            event_id = %stored.id,
            event_name = %stored.event_name,
            sex = %stored.sex,
            campus_only = stored.campus_only,
            free = stored.free,
            event = "event_created",
            "Created event"
        );
        Ok(stored)
    }

    /// Events matching every specified criterion, in creation order
    ///
    /// Unspecified criteria impose no constraint; no matches is an empty list.
    pub async fn filter(&self, criteria: &EventFilterCriteria) -> DomainResult<Vec<Event>> {
        let plan = EventQueryPlan::from_criteria(criteria);

        let events = within_store_deadline(
            self.store_timeout,
            "query_events",
            self.event_repository.query(&plan),
        )
        .await?;

        tracing::debug!(
            unconstrained = criteria.is_unconstrained(),
            predicates = plan.predicates().len(),
            matched = events.len(),
            event = "events_filtered",
            "Filtered events"
        );
        Ok(events)
    }

    /// Every event, in creation order
    pub async fn all_events(&self) -> DomainResult<Vec<Event>> {
        self.filter(&EventFilterCriteria::unconstrained()).await
    }
}
