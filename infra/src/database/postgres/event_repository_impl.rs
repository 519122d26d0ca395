//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use radar_core::domain::entities::{AudienceSex, Event};
use radar_core::{DomainError, EventQueryPlan, EventRepository};

use super::event_query::{select_events, EVENT_COLUMNS};
use super::store_error;

/// PostgreSQL-backed event store
#[derive(Clone)]
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_event(row: &PgRow) -> Result<Event, sqlx::Error> {
        let sex: String = row.try_get("sex")?;
        let sex = sex
            .parse::<AudienceSex>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Event {
            id: row.try_get("id")?,
            event_name: row.try_get("event_name")?,
            organizer_name: row.try_get("organizer_name")?,
            sex,
            campus_only: row.try_get("campus_only")?,
            free: row.try_get("free")?,
            description: row.try_get("description")?,
            schedule: row.try_get("schedule")?,
            location: row.try_get("location")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn rows_to_events(rows: &[PgRow]) -> Result<Vec<Event>, sqlx::Error> {
        rows.iter().map(Self::row_to_event).collect()
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn insert(&self, event: Event) -> Result<Event, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO events (
                id, event_name, organizer_name, sex, campus_only, free,
                description, schedule, location, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(event.id)
        .bind(&event.event_name)
        .bind(&event.organizer_name)
        .bind(event.sex.as_str())
        .bind(event.campus_only)
        .bind(event.free)
        .bind(&event.description)
        .bind(&event.schedule)
        .bind(&event.location)
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(store_error("insert_event"))?;

        Ok(event)
    }

    async fn query(&self, plan: &EventQueryPlan) -> Result<Vec<Event>, DomainError> {
        let mut builder = select_events(plan);
        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("query_events"))?;

        Self::rows_to_events(&rows).map_err(store_error("query_events"))
    }

    async fn find_by_name(&self, event_name: &str) -> Result<Option<Event>, DomainError> {
        let query = format!(
            "SELECT {} FROM events WHERE event_name = $1 ORDER BY seq LIMIT 1",
            EVENT_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(event_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("find_event_by_name"))?;

        row.as_ref()
            .map(Self::row_to_event)
            .transpose()
            .map_err(store_error("find_event_by_name"))
    }
}
