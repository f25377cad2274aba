pub mod reminder;

pub use reminder::{Reminder, ReminderRequest, ReminderStatus};
