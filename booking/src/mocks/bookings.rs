//! Mock booking store for testing.

use crate::error::{BookingError, Result};
use crate::model::{Booking, BookingId, ReminderWindow};
use crate::providers::{BookingStore, NewBooking};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock booking store.
///
/// Uses in-memory storage; `mark_reminder_sent` claims flags under one
/// lock, matching the PostgreSQL store's conditional update.
#[derive(Debug, Clone, Default)]
pub struct MockBookingStore {
    bookings: Arc<Mutex<HashMap<BookingId, Booking>>>,
}

impl MockBookingStore {
    /// Create a new mock booking store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of stored bookings.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self
            .bookings
            .lock()
            .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?
            .len())
    }

    /// Whether the store is empty.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Fetch one booking by id.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn get(&self, id: BookingId) -> Result<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?
            .get(&id)
            .cloned())
    }

    /// Insert a pre-built booking, for seeding reminder tests.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn insert(&self, booking: Booking) -> Result<()> {
        self.bookings
            .lock()
            .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?
            .insert(booking.id, booking);
        Ok(())
    }
}

impl BookingStore for MockBookingStore {
    fn create(&self, new: NewBooking) -> impl Future<Output = Result<Booking>> + Send {
        let bookings = Arc::clone(&self.bookings);

        async move {
            let booking = Booking {
                id: BookingId::new(),
                name: new.name,
                email: new.email,
                school_year: new.school_year,
                hours_per_week: new.hours_per_week,
                date: new.date,
                code_id: new.code_id,
                email_24h_sent: false,
                email_1h_sent: false,
                email_15m_sent: false,
                created_at: Utc::now(),
            };

            bookings
                .lock()
                .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?
                .insert(booking.id, booking.clone());

            Ok(booking)
        }
    }

    fn find_upcoming(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Booking>>> + Send {
        let bookings = Arc::clone(&self.bookings);

        async move {
            let guard = bookings
                .lock()
                .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?;

            let mut upcoming: Vec<Booking> =
                guard.values().filter(|b| b.date >= now).cloned().collect();
            upcoming.sort_by_key(|b| b.date);
            Ok(upcoming)
        }
    }

    fn mark_reminder_sent(
        &self,
        id: BookingId,
        window: ReminderWindow,
    ) -> impl Future<Output = Result<bool>> + Send {
        let bookings = Arc::clone(&self.bookings);

        async move {
            let mut guard = bookings
                .lock()
                .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?;

            let Some(booking) = guard.get_mut(&id) else {
                return Ok(false);
            };

            let flag = match window {
                ReminderWindow::TwentyFourHours => &mut booking.email_24h_sent,
                ReminderWindow::OneHour => &mut booking.email_1h_sent,
                ReminderWindow::FifteenMinutes => &mut booking.email_15m_sent,
            };

            if *flag {
                Ok(false)
            } else {
                *flag = true;
                Ok(true)
            }
        }
    }
}
