mod get_statistics_service;
mod update_statistics_service;

pub use get_statistics_service::GetStatisticsService;
pub use update_statistics_service::UpdateStatisticsService;
