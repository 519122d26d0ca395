//! Event repository trait.

use async_trait::async_trait;

use crate::domain::entities::event::Event;
use crate::domain::value_objects::event_filter::EventQueryPlan;
use crate::errors::DomainError;

/// Repository trait for Event persistence and querying
///
/// Implementations must return events in creation order.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a new event and return the stored record
    async fn insert(&self, event: Event) -> Result<Event, DomainError>;

    /// Return every event satisfying all predicates of `plan`
    ///
    /// An empty plan returns all events. No matches is an empty vector.
    async fn query(&self, plan: &EventQueryPlan) -> Result<Vec<Event>, DomainError>;

    /// Find the earliest event with exactly this name
    async fn find_by_name(&self, event_name: &str) -> Result<Option<Event>, DomainError>;
}
