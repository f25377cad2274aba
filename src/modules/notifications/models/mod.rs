pub mod notification;

pub use notification::{EmailTemplate, NotificationReport, NotificationTarget};
