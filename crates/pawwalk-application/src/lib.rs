pub mod app_store;
pub mod reminder_service;

pub use app_store::AppStore;
pub use reminder_service::ReminderService;
