//! Notification scheduler trait.

use async_trait::async_trait;

use super::model::NotificationRequest;
use crate::error::Result;

/// Platform local-notification scheduler.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Schedules `request` and returns the platform's notification id.
    async fn schedule(&self, request: NotificationRequest) -> Result<String>;
}
