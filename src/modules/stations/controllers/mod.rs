pub mod station_controller;

pub use station_controller::configure_station_routes;
