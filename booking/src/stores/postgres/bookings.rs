//! PostgreSQL booking store.

use crate::error::{BookingError, Result};
use crate::model::{Booking, BookingId, CodeId, ReminderWindow};
use crate::providers::{BookingStore, NewBooking};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL booking store.
#[derive(Clone)]
pub struct PostgresBookingStore {
    /// Shared connection pool.
    pool: PgPool,
}

/// Row shape of the `bookings` table.
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: uuid::Uuid,
    name: String,
    email: String,
    school_year: String,
    hours_per_week: String,
    date: DateTime<Utc>,
    code_id: uuid::Uuid,
    email_24h_sent: bool,
    email_1h_sent: bool,
    email_15m_sent: bool,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: BookingId(row.id),
            name: row.name,
            email: row.email,
            school_year: row.school_year,
            hours_per_week: row.hours_per_week,
            date: row.date,
            code_id: CodeId(row.code_id),
            email_24h_sent: row.email_24h_sent,
            email_1h_sent: row.email_1h_sent,
            email_15m_sent: row.email_15m_sent,
            created_at: row.created_at,
        }
    }
}

/// Flag column for a reminder window.
const fn flag_column(window: ReminderWindow) -> &'static str {
    match window {
        ReminderWindow::TwentyFourHours => "email_24h_sent",
        ReminderWindow::OneHour => "email_1h_sent",
        ReminderWindow::FifteenMinutes => "email_15m_sent",
    }
}

impl PostgresBookingStore {
    /// Create a new store over the shared pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BookingStore for PostgresBookingStore {
    async fn create(&self, new: NewBooking) -> Result<Booking> {
        let row: BookingRow = sqlx::query_as(
            r"
            INSERT INTO bookings
                (id, name, email, school_year, hours_per_week, date, code_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, school_year, hours_per_week, date, code_id,
                      email_24h_sent, email_1h_sent, email_15m_sent, created_at
            ",
        )
        .bind(BookingId::new().0)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.school_year)
        .bind(&new.hours_per_week)
        .bind(new.date)
        .bind(new.code_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| BookingError::Database(format!("Failed to create booking: {e}")))?;

        Ok(row.into())
    }

    async fn find_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r"
            SELECT id, name, email, school_year, hours_per_week, date, code_id,
                   email_24h_sent, email_1h_sent, email_15m_sent, created_at
            FROM bookings
            WHERE date >= $1
            ORDER BY date ASC
            ",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookingError::Database(format!("Failed to fetch upcoming bookings: {e}")))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn mark_reminder_sent(&self, id: BookingId, window: ReminderWindow) -> Result<bool> {
        // The column name is one of three constants, never user input.
        let column = flag_column(window);
        let sql = format!(
            "UPDATE bookings SET {column} = TRUE WHERE id = $1 AND {column} = FALSE"
        );

        let result = sqlx::query(&sql)
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| BookingError::Database(format!("Failed to mark reminder sent: {e}")))?;

        Ok(result.rows_affected() == 1)
    }
}
