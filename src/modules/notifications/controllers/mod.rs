pub mod notification_controller;

pub use notification_controller::configure_notification_routes;
