mod get_statistics;
mod update_statistics;

pub use get_statistics::{GetStatisticsError, GetStatisticsUseCase};
pub use update_statistics::{
    UpdateStatisticsCommand, UpdateStatisticsError, UpdateStatisticsUseCase,
};
