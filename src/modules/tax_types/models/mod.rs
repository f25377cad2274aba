pub mod tax_type;

pub use tax_type::{TaxType, TaxTypeRequest};
