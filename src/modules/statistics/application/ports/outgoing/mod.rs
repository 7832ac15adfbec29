mod statistics_repository;

pub use statistics_repository::{StatisticsRepository, StatisticsRepositoryError};
