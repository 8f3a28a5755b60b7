pub mod config_service;
pub mod location_provider;
pub mod notification_scheduler;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::location_provider::FixedLocationProvider;
pub use crate::notification_scheduler::{ScheduledNotification, TracingNotificationScheduler};
pub use crate::storage::{JsonFileStore, MemoryStore};
