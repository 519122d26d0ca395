//! PostgreSQL implementation of QuestionRepository

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use radar_core::domain::entities::Question;
use radar_core::{DomainError, QuestionRepository};

use super::store_error;

/// PostgreSQL-backed question store
#[derive(Clone)]
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_question(row: &PgRow) -> Result<Question, sqlx::Error> {
        Ok(Question {
            id: row.try_get("id")?,
            question: row.try_get("question")?,
            user_name: row.try_get("user_name")?,
            event_name: row.try_get("event_name")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn insert(&self, question: Question) -> Result<Question, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO questions (id, event_name, user_name, question, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(question.id)
        .bind(&question.event_name)
        .bind(&question.user_name)
        .bind(&question.question)
        .bind(question.created_at)
        .execute(&self.pool)
        .await
        .map_err(store_error("insert_question"))?;

        Ok(question)
    }

    async fn find_by_event(&self, event_name: &str) -> Result<Vec<Question>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, event_name, user_name, question, created_at
            FROM questions
            WHERE event_name = $1
            ORDER BY seq
            "#,
        )
        .bind(event_name)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error("questions_for_event"))?;

        rows.iter()
            .map(Self::row_to_question)
            .collect::<Result<Vec<_>, _>>()
            .map_err(store_error("questions_for_event"))
    }
}
