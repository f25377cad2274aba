//! Status workflow for tax records: classification, transition tables and
//! the legality gate every status mutation passes through.

pub mod classifier;
pub mod engine;
pub mod status;

pub use classifier::{requires_accountant_review, TaxCategory};
pub use engine::StatusWorkflow;
pub use status::{StoredStatus, TaxStatus, OVERDUE_LABEL};
