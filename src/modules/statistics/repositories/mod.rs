pub mod statistics_repository;

pub use statistics_repository::{MySqlStatisticsRepository, StatisticsRepository};
