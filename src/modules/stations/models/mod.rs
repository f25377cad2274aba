pub mod charge_station;

pub use charge_station::{ChargeStation, StationRequest, StationStatus};
