//! In-memory implementation of EventRepository

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::event::Event;
use crate::domain::value_objects::event_filter::EventQueryPlan;
use crate::errors::DomainError;
use crate::repositories::fault::FaultInjector;

use super::trait_::EventRepository;

/// Mock event repository; a `Vec` keeps insertion order
pub struct MockEventRepository {
    events: Arc<RwLock<Vec<Event>>>,
    faults: FaultInjector,
}

impl MockEventRepository {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            faults: FaultInjector::default(),
        }
    }

    /// Snapshot of every stored event
    pub async fn all(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.faults.set_unavailable(unavailable);
    }

    pub fn set_latency(&self, latency: Duration) {
        self.faults.set_latency(latency);
    }
}

impl Default for MockEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for MockEventRepository {
    async fn insert(&self, event: Event) -> Result<Event, DomainError> {
        self.faults.before("insert_event").await?;
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn query(&self, plan: &EventQueryPlan) -> Result<Vec<Event>, DomainError> {
        self.faults.before("query_events").await?;
        let events = self.events.read().await;
        Ok(events.iter().filter(|e| plan.matches(e)).cloned().collect())
    }

    async fn find_by_name(&self, event_name: &str) -> Result<Option<Event>, DomainError> {
        self.faults.before("find_event_by_name").await?;
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.event_name == event_name).cloned())
    }
}
