pub mod statistics_controller;

pub use statistics_controller::configure_statistics_routes;
