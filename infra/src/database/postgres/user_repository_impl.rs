//! PostgreSQL implementation of UserRepository
//!
//! The verification code lives in columns of the `users` row. Issuing,
//! consuming and revoking a code are each a single UPDATE whose WHERE clause
//! carries the precondition, so concurrent requests cannot both win.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};

use radar_core::domain::entities::{User, VerificationCode, VerificationStatus};
use radar_core::{DomainError, UserRepository};

use super::store_error;

const USER_COLUMNS: &str = "id, email, is_verified, verification_code, code_issued_at, \
                            code_expires_at, code_consumed, created_at, updated_at";

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, sqlx::Error> {
        let code: Option<String> = row.try_get("verification_code")?;
        let issued_at: Option<DateTime<Utc>> = row.try_get("code_issued_at")?;
        let expires_at: Option<DateTime<Utc>> = row.try_get("code_expires_at")?;

        let verification_code = match (code, issued_at, expires_at) {
            (Some(code), Some(issued_at), Some(expires_at)) => Some(VerificationCode {
                code,
                issued_at,
                expires_at,
                consumed: row.try_get("code_consumed")?,
            }),
            _ => None,
        };

        let status = if row.try_get::<bool, _>("is_verified")? {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Unverified
        };

        Ok(User {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            status,
            verification_code,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("find_user_by_email"))?;

        row.as_ref()
            .map(Self::row_to_user)
            .transpose()
            .map_err(store_error("find_user_by_email"))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, is_verified, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(user.is_verified())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(store_error("create_user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AlreadyExists {
                resource: "user".to_string(),
            });
        }
        Ok(user)
    }

    async fn save_verification_code(
        &self,
        email: &str,
        code: &VerificationCode,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET verification_code = $2,
                code_issued_at = $3,
                code_expires_at = $4,
                code_consumed = $5,
                updated_at = $3
            WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(&code.code)
        .bind(code.issued_at)
        .bind(code.expires_at)
        .bind(code.consumed)
        .execute(&self.pool)
        .await
        .map_err(store_error("save_verification_code"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user"));
        }
        Ok(())
    }

    async fn consume_verification_code(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DomainError> {
        let query = format!(
            r#"
            UPDATE users
            SET is_verified = TRUE,
                code_consumed = TRUE,
                updated_at = $3
            WHERE email = $1
              AND verification_code = $2
              AND code_consumed = FALSE
              AND code_expires_at > $3
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(email)
            .bind(code)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("consume_verification_code"))?;

        row.as_ref()
            .map(Self::row_to_user)
            .transpose()
            .map_err(store_error("consume_verification_code"))
    }

    async fn clear_verification_code(&self, email: &str, code: &str) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET verification_code = NULL,
                code_issued_at = NULL,
                code_expires_at = NULL,
                updated_at = NOW()
            WHERE email = $1
              AND verification_code = $2
              AND code_consumed = FALSE
            "#,
        )
        .bind(email)
        .bind(code)
        .execute(&self.pool)
        .await
        .map_err(store_error("clear_verification_code"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(store_error("ping"))?;
        Ok(())
    }
}
