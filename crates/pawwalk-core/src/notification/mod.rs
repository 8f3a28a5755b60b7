//! Local notification domain module.

mod model;
mod scheduler;

pub use model::{NotificationContent, NotificationRequest, NotificationTrigger};
pub use scheduler::NotificationScheduler;
