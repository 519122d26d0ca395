//! Translation of an event query plan into SQL

use radar_core::domain::value_objects::{EventPredicate, EventQueryPlan};
use sqlx::{Postgres, QueryBuilder};

pub(crate) const EVENT_COLUMNS: &str = "id, event_name, organizer_name, sex, campus_only, \
                                        free, description, schedule, location, created_at";

/// One bound equality condition per predicate, in plan order
pub(crate) fn select_events(plan: &EventQueryPlan) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM events", EVENT_COLUMNS));

    for (index, predicate) in plan.predicates().iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        match *predicate {
            EventPredicate::Sex(sex) => builder.push("sex = ").push_bind(sex.as_str()),
            EventPredicate::CampusOnly(flag) => builder.push("campus_only = ").push_bind(flag),
            EventPredicate::Free(flag) => builder.push("free = ").push_bind(flag),
        };
    }

    builder.push(" ORDER BY seq");
    builder
}
