//! PostgreSQL store implementations.
//!
//! Both stores share one process-wide [`sqlx::PgPool`], created once at
//! startup and closed explicitly on shutdown. Queries use the runtime API
//! (not the compile-time-checked macros) so the crate builds without a
//! live `DATABASE_URL`.
//!
//! The single-use invariants live here: consuming a code and claiming a
//! reminder flag are single conditional `UPDATE`s whose `rows_affected`
//! tells the caller whether it won.

mod bookings;
mod codes;

pub use bookings::PostgresBookingStore;
pub use codes::PostgresAccessCodeStore;

use crate::error::{BookingError, Result};
use sqlx::PgPool;

/// Run database migrations.
///
/// # Errors
///
/// Returns error if migrations fail.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| BookingError::Database(format!("Migration failed: {e}")))?;
    Ok(())
}
