pub mod tax_service;

pub use tax_service::TaxService;
