pub mod tax_type_controller;

pub use tax_type_controller::configure_tax_type_routes;
