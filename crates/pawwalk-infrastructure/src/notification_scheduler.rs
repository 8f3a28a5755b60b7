//! Notification scheduler that records requests and reports them through `tracing`.

use async_trait::async_trait;
use pawwalk_core::Result;
use pawwalk_core::notification::{NotificationRequest, NotificationScheduler};
use tokio::sync::Mutex;
use uuid::Uuid;

/// A scheduled request together with the id handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledNotification {
    pub id: String,
    pub request: NotificationRequest,
}

/// Stand-in for a platform notification center.
#[derive(Debug, Default)]
pub struct TracingNotificationScheduler {
    scheduled: Mutex<Vec<ScheduledNotification>>,
}

impl TracingNotificationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything scheduled so far, oldest first.
    pub async fn scheduled(&self) -> Vec<ScheduledNotification> {
        self.scheduled.lock().await.clone()
    }
}

#[async_trait]
impl NotificationScheduler for TracingNotificationScheduler {
    async fn schedule(&self, request: NotificationRequest) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        tracing::info!(
            id = %id,
            title = %request.title,
            trigger = ?request.trigger,
            "Scheduled local notification"
        );

        self.scheduled.lock().await.push(ScheduledNotification {
            id: id.clone(),
            request,
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawwalk_core::notification::NotificationTrigger;

    #[tokio::test]
    async fn test_records_requests_in_order() {
        let scheduler = TracingNotificationScheduler::new();
        let first = scheduler
            .schedule(NotificationRequest {
                title: "One".to_string(),
                body: "first".to_string(),
                trigger: NotificationTrigger::InSeconds { seconds: 5 },
            })
            .await
            .unwrap();
        let second = scheduler
            .schedule(NotificationRequest {
                title: "Two".to_string(),
                body: "second".to_string(),
                trigger: NotificationTrigger::InSeconds { seconds: 10 },
            })
            .await
            .unwrap();

        let scheduled = scheduler.scheduled().await;
        assert_ne!(first, second);
        assert_eq!(scheduled.len(), 2);
        assert_eq!(scheduled[0].id, first);
        assert_eq!(scheduled[1].request.title, "Two");
    }
}
