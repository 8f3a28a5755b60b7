//! Local reminder scheduling.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use pawwalk_core::booking::Booking;
use pawwalk_core::error::{PawError, Result};
use pawwalk_core::notification::{
    NotificationContent, NotificationRequest, NotificationScheduler, NotificationTrigger,
};

const DEFAULT_TITLE: &str = "Reminder";
const DEFAULT_BODY: &str = "Your event is coming up!";
const TEST_TITLE: &str = "Test notification";
const BOOKING_TITLE: &str = "Upcoming walk";

/// Schedules one-off local notifications through a platform scheduler.
#[derive(Clone)]
pub struct ReminderService {
    scheduler: Arc<dyn NotificationScheduler>,
}

impl ReminderService {
    pub fn new(scheduler: Arc<dyn NotificationScheduler>) -> Self {
        Self { scheduler }
    }

    /// Schedules a notification at `target`.
    ///
    /// Rejects instants that are not strictly in the future.
    pub async fn schedule_at(
        &self,
        target: DateTime<Utc>,
        content: NotificationContent,
    ) -> Result<String> {
        if target <= Utc::now() {
            return Err(PawError::validation("Chosen time is in the past"));
        }

        let request = NotificationRequest::resolve(
            content,
            DEFAULT_TITLE,
            DEFAULT_BODY,
            NotificationTrigger::At { date: target },
        );
        self.scheduler.schedule(request).await
    }

    /// Schedules a notification `seconds` from now.
    pub async fn schedule_in_seconds(
        &self,
        seconds: u64,
        content: NotificationContent,
    ) -> Result<String> {
        let request = NotificationRequest::resolve(
            content,
            TEST_TITLE,
            format!("Firing in {}s", seconds),
            NotificationTrigger::InSeconds { seconds },
        );
        self.scheduler.schedule(request).await
    }

    /// Schedules a reminder `lead` before the booking starts.
    pub async fn schedule_booking_reminder(&self, booking: &Booking, lead: Duration) -> Result<String> {
        let target = booking.start_time - lead;
        let content = NotificationContent::new(
            BOOKING_TITLE,
            format!(
                "{} walks {} at {}",
                booking.walker_name,
                booking.dog_name,
                booking.start_time.format("%Y-%m-%d %H:%M UTC")
            ),
        );

        tracing::debug!(booking_id = %booking.id, %target, "Scheduling booking reminder");
        self.schedule_at(target, content).await
    }
}
