//! Event filter criteria and the query plan derived from them.
//!
//! Each criterion is tri-state: `None` means the caller did not ask, which is
//! different from asking for `false`. Only specified criteria become
//! predicates, and predicates are ANDed together.

use serde::{Deserialize, Serialize};

use crate::domain::entities::event::{AudienceSex, Event};
use crate::errors::ValidationError;

/// Optional predicates over events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilterCriteria {
    pub sex: Option<AudienceSex>,
    pub campus_only: Option<bool>,
    pub free: Option<bool>,
}

impl EventFilterCriteria {
    /// Criteria with nothing specified
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn with_sex(mut self, sex: AudienceSex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn with_campus_only(mut self, campus_only: bool) -> Self {
        self.campus_only = Some(campus_only);
        self
    }

    pub fn with_free(mut self, free: bool) -> Self {
        self.free = Some(free);
        self
    }

    /// Parses raw request values; absent or blank values stay unspecified
    pub fn from_raw(
        sex: Option<&str>,
        campus_only: Option<&str>,
        free: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let sex = match non_blank(sex) {
            Some(raw) => Some(raw.parse::<AudienceSex>()?),
            None => None,
        };
        Ok(Self {
            sex,
            campus_only: parse_flag("campus_only", campus_only)?,
            free: parse_flag("free", free)?,
        })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.sex.is_none() && self.campus_only.is_none() && self.free.is_none()
    }

    /// Whether `event` satisfies every specified criterion
    pub fn matches(&self, event: &Event) -> bool {
        EventQueryPlan::from_criteria(self).matches(event)
    }
}

/// A single equality predicate on one event attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPredicate {
    Sex(AudienceSex),
    CampusOnly(bool),
    Free(bool),
}

impl EventPredicate {
    pub fn matches(&self, event: &Event) -> bool {
        match *self {
            EventPredicate::Sex(sex) => event.sex == sex,
            EventPredicate::CampusOnly(flag) => event.campus_only == flag,
            EventPredicate::Free(flag) => event.free == flag,
        }
    }
}

/// Conjunction of predicates handed to the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQueryPlan {
    predicates: Vec<EventPredicate>,
}

impl EventQueryPlan {
    /// Plan that returns every event
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_criteria(criteria: &EventFilterCriteria) -> Self {
        let predicates = [
            criteria.sex.map(EventPredicate::Sex),
            criteria.campus_only.map(EventPredicate::CampusOnly),
            criteria.free.map(EventPredicate::Free),
        ]
        .into_iter()
        .flatten()
        .collect();
        Self { predicates }
    }

    pub fn predicates(&self) -> &[EventPredicate] {
        &self.predicates
    }

    pub fn is_unfiltered(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.predicates.iter().all(|p| p.matches(event))
    }
}

/// Parses a boolean flag; accepts true/false, t/f, 1/0, yes/no in any case
pub fn parse_flag(field: &str, raw: Option<&str>) -> Result<Option<bool>, ValidationError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) => match value.to_lowercase().as_str() {
            "true" | "t" | "1" | "yes" => Ok(Some(true)),
            "false" | "f" | "0" | "no" => Ok(Some(false)),
            _ => Err(ValidationError::invalid_format(field)),
        },
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn event(sex: AudienceSex, campus_only: bool, free: bool) -> Event {
        Event {
            id: Uuid::new_v4(),
            event_name: "Talk".to_string(),
            organizer_name: "Club".to_string(),
            sex,
            campus_only,
            free,
            description: None,
            schedule: None,
            location: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unconstrained_matches_everything() {
        let criteria = EventFilterCriteria::unconstrained();
        assert!(criteria.is_unconstrained());
        assert!(EventQueryPlan::from_criteria(&criteria).is_unfiltered());
        assert!(criteria.matches(&event(AudienceSex::Female, false, false)));
    }

    #[test]
    fn test_false_is_a_constraint() {
        let criteria = EventFilterCriteria::unconstrained().with_free(false);
        assert!(!criteria.is_unconstrained());
        assert!(criteria.matches(&event(AudienceSex::Any, true, false)));
        assert!(!criteria.matches(&event(AudienceSex::Any, true, true)));
    }

    #[test]
    fn test_predicates_are_anded() {
        let criteria = EventFilterCriteria::unconstrained()
            .with_sex(AudienceSex::Female)
            .with_campus_only(false);
        let plan = EventQueryPlan::from_criteria(&criteria);

        assert_eq!(
            plan.predicates(),
            &[
                EventPredicate::Sex(AudienceSex::Female),
                EventPredicate::CampusOnly(false)
            ]
        );
        assert!(plan.matches(&event(AudienceSex::Female, false, true)));
        assert!(!plan.matches(&event(AudienceSex::Female, true, true)));
        assert!(!plan.matches(&event(AudienceSex::Any, false, true)));
    }

    #[test]
    fn test_from_raw_treats_blank_as_unspecified() {
        let criteria = EventFilterCriteria::from_raw(Some(""), None, Some("  ")).unwrap();
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_from_raw_parses_values() {
        let criteria =
            EventFilterCriteria::from_raw(Some("female"), Some("FALSE"), Some("1")).unwrap();
        assert_eq!(criteria.sex, Some(AudienceSex::Female));
        assert_eq!(criteria.campus_only, Some(false));
        assert_eq!(criteria.free, Some(true));
    }

    #[test]
    fn test_from_raw_rejects_garbage() {
        assert_eq!(
            EventFilterCriteria::from_raw(None, Some("maybe"), None).unwrap_err(),
            ValidationError::invalid_format("campus_only")
        );
        assert_eq!(
            EventFilterCriteria::from_raw(Some("x"), None, None).unwrap_err(),
            ValidationError::invalid_format("sex")
        );
    }
}
