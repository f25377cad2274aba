pub mod station_repository;

pub use station_repository::{MySqlStationRepository, StationRepository};
