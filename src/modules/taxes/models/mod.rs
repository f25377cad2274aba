pub mod tax;

pub use tax::{CreateTaxRequest, Tax, TaxDetail, TaxView, TransitionRequest, WorkflowView};
