pub mod mailer;
pub mod notification_service;
pub mod overdue_checker;
pub mod templates;

pub use mailer::{EmailSender, SendGridMailer};
pub use notification_service::NotificationService;
pub use overdue_checker::OverdueChecker;
pub use templates::EmailTemplates;
