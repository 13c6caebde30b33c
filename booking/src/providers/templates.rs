//! Email subjects and HTML bodies shared by the sending providers.

use crate::model::{Booking, ReminderWindow};

/// Timestamp format used in email copy.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(crate) fn confirmation_subject() -> &'static str {
    "Booking confirmed ✓"
}

pub(crate) fn confirmation_html(booking: &Booking) -> String {
    format!(
        r"
<h2>Hello {name}!</h2>
<p>Your tutoring session has been booked.</p>
<p><strong>Date:</strong> {date}</p>
<p><strong>School year:</strong> {school_year}</p>
<p><strong>Hours per week:</strong> {hours_per_week}</p>
<br>
<p>You will receive automatic reminders:</p>
<ul>
  <li>24 hours before</li>
  <li>1 hour before</li>
  <li>15 minutes before</li>
</ul>
",
        name = booking.name,
        date = booking.date.format(DATE_FORMAT),
        school_year = booking.school_year,
        hours_per_week = booking.hours_per_week,
    )
}

pub(crate) fn operator_notification_subject(booking: &Booking) -> String {
    format!("New booking from {}", booking.name)
}

pub(crate) fn operator_notification_html(booking: &Booking) -> String {
    format!(
        r"
<h2>New booking 📋</h2>
<p><strong>Student:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>School year:</strong> {school_year}</p>
<p><strong>Hours per week:</strong> {hours_per_week}</p>
<p><strong>Date:</strong> {date}</p>
",
        name = booking.name,
        email = booking.email,
        school_year = booking.school_year,
        hours_per_week = booking.hours_per_week,
        date = booking.date.format(DATE_FORMAT),
    )
}

pub(crate) fn reminder_subject(window: ReminderWindow) -> String {
    format!("Reminder: session in {}", window.label())
}

pub(crate) fn reminder_html(booking: &Booking, window: ReminderWindow) -> String {
    format!(
        r"
<h2>Hello {name}!</h2>
<p>Your tutoring session starts in <strong>{label}</strong>.</p>
<p><strong>Date:</strong> {date}</p>
<p><strong>School year:</strong> {school_year}</p>
<br>
<p>See you soon! 📚</p>
",
        name = booking.name,
        label = window.label(),
        date = booking.date.format(DATE_FORMAT),
        school_year = booking.school_year,
    )
}

pub(crate) fn operator_reminder_subject(booking: &Booking, window: ReminderWindow) -> String {
    format!("Reminder: session with {} in {}", booking.name, window.label())
}

pub(crate) fn operator_reminder_html(booking: &Booking, window: ReminderWindow) -> String {
    format!(
        r"
<h2>Session reminder 🔔</h2>
<p>You have a tutoring session in <strong>{label}</strong>.</p>
<p><strong>Student:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>School year:</strong> {school_year}</p>
<p><strong>Time:</strong> {date}</p>
",
        label = window.label(),
        name = booking.name,
        email = booking.email,
        school_year = booking.school_year,
        date = booking.date.format(DATE_FORMAT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingId, CodeId};
    use chrono::{TimeZone, Utc};

    fn sample_booking() -> Booking {
        Booking {
            id: BookingId::new(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            school_year: "11".to_string(),
            hours_per_week: "2".to_string(),
            date: Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).single().unwrap_or_default(),
            code_id: CodeId::new(),
            email_24h_sent: false,
            email_1h_sent: false,
            email_15m_sent: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_confirmation_mentions_requester_and_date() {
        let html = confirmation_html(&sample_booking());
        assert!(html.contains("Hello Ana!"));
        assert!(html.contains("2026-03-14 15:00"));
    }

    #[test]
    fn test_reminder_subject_carries_window_label() {
        assert_eq!(
            reminder_subject(ReminderWindow::OneHour),
            "Reminder: session in 1 hour"
        );
        assert_eq!(
            reminder_subject(ReminderWindow::FifteenMinutes),
            "Reminder: session in 15 minutes"
        );
    }

    #[test]
    fn test_operator_reminder_carries_student_details() {
        let html = operator_reminder_html(&sample_booking(), ReminderWindow::TwentyFourHours);
        assert!(html.contains("Ana"));
        assert!(html.contains("ana@example.com"));
        assert!(html.contains("24 hours"));
    }
}
