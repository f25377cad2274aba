pub mod health;
pub mod notifications;
pub mod reminders;
pub mod stations;
pub mod statistics;
pub mod tax_types;
pub mod taxes;
pub mod users;
pub mod workflow;
