pub mod currency;
pub mod error;
pub mod timezone;

pub use currency::Krw;
pub use error::{AppError, Result};
pub use timezone::Kst;
