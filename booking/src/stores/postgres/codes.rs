//! PostgreSQL access-code store.

use crate::error::{BookingError, Result};
use crate::model::{AccessCode, CodeId};
use crate::providers::AccessCodeStore;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL access-code store.
#[derive(Clone)]
pub struct PostgresAccessCodeStore {
    /// Shared connection pool.
    pool: PgPool,
}

/// Row shape of the `access_codes` table.
#[derive(sqlx::FromRow)]
struct AccessCodeRow {
    id: uuid::Uuid,
    code: String,
    is_used: bool,
    created_at: DateTime<Utc>,
    used_at: Option<DateTime<Utc>>,
}

impl From<AccessCodeRow> for AccessCode {
    fn from(row: AccessCodeRow) -> Self {
        Self {
            id: CodeId(row.id),
            code: row.code,
            is_used: row.is_used,
            created_at: row.created_at,
            used_at: row.used_at,
        }
    }
}

impl PostgresAccessCodeStore {
    /// Create a new store over the shared pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccessCodeStore for PostgresAccessCodeStore {
    async fn create(&self, code: String) -> Result<AccessCode> {
        let row: AccessCodeRow = sqlx::query_as(
            r"
            INSERT INTO access_codes (id, code)
            VALUES ($1, $2)
            RETURNING id, code, is_used, created_at, used_at
            ",
        )
        .bind(CodeId::new().0)
        .bind(&code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return BookingError::Database("access code collision".to_string());
                }
            }
            BookingError::Database(format!("Failed to create access code: {e}"))
        })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<AccessCode>> {
        let row: Option<AccessCodeRow> = sqlx::query_as(
            r"
            SELECT id, code, is_used, created_at, used_at
            FROM access_codes
            WHERE code = $1
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookingError::Database(format!("Failed to look up access code: {e}")))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: CodeId) -> Result<Option<AccessCode>> {
        let row: Option<AccessCodeRow> = sqlx::query_as(
            r"
            SELECT id, code, is_used, created_at, used_at
            FROM access_codes
            WHERE id = $1
            ",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookingError::Database(format!("Failed to look up access code: {e}")))?;

        Ok(row.map(Into::into))
    }

    async fn consume(&self, id: CodeId, used_at: DateTime<Utc>) -> Result<bool> {
        // Compare-and-swap: only an unused row matches, so of two
        // concurrent consumers exactly one sees rows_affected == 1.
        let result = sqlx::query(
            r"
            UPDATE access_codes
            SET is_used = TRUE,
                used_at = $2
            WHERE id = $1 AND is_used = FALSE
            ",
        )
        .bind(id.0)
        .bind(used_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookingError::Database(format!("Failed to consume access code: {e}")))?;

        Ok(result.rows_affected() == 1)
    }
}
