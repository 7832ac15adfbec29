use async_trait::async_trait;

use crate::shared::time::now_utc;
use crate::statistics::application::{
    domain::entities::Statistics,
    ports::{
        incoming::use_cases::{
            UpdateStatisticsCommand, UpdateStatisticsError, UpdateStatisticsUseCase,
        },
        outgoing::StatisticsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateStatisticsService<R>
where
    R: StatisticsRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateStatisticsService<R>
where
    R: StatisticsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateStatisticsUseCase for UpdateStatisticsService<R>
where
    R: StatisticsRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateStatisticsCommand,
    ) -> Result<Statistics, UpdateStatisticsError> {
        self.repository
            .replace(command.into_statistics(now_utc()))
            .await
            .map_err(|e| UpdateStatisticsError::RepositoryError(e.to_string()))
    }
}
