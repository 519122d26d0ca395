//! Value objects representing immutable domain concepts.

pub mod event_filter;

pub use event_filter::{parse_flag, EventFilterCriteria, EventPredicate, EventQueryPlan};
