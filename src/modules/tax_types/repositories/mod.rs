pub mod tax_type_repository;

pub use tax_type_repository::{MySqlTaxTypeRepository, TaxTypeRepository};
