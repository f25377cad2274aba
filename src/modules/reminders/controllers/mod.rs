pub mod reminder_controller;

pub use reminder_controller::configure_reminder_routes;
