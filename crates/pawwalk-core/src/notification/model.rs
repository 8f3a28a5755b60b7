//! Local notification models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When a notification should fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationTrigger {
    /// Fire at an absolute instant.
    At { date: DateTime<Utc> },
    /// Fire after a delay.
    InSeconds { seconds: u64 },
}

/// Title and body overrides. Unset fields fall back to the scheduler call's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl NotificationContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }
}

/// A fully resolved notification handed to the platform scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub trigger: NotificationTrigger,
}

impl NotificationRequest {
    /// Resolves `content` against default title and body.
    pub fn resolve(
        content: NotificationContent,
        default_title: &str,
        default_body: impl Into<String>,
        trigger: NotificationTrigger,
    ) -> Self {
        Self {
            title: content.title.unwrap_or_else(|| default_title.to_string()),
            body: content.body.unwrap_or_else(|| default_body.into()),
            trigger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_overrides() {
        let trigger = NotificationTrigger::InSeconds { seconds: 5 };
        let request = NotificationRequest::resolve(
            NotificationContent {
                title: Some("Walk soon".to_string()),
                body: None,
            },
            "Reminder",
            "Your event is coming up!",
            trigger.clone(),
        );

        assert_eq!(request.title, "Walk soon");
        assert_eq!(request.body, "Your event is coming up!");
        assert_eq!(request.trigger, trigger);
    }
}
