use async_trait::async_trait;
use tracing::info;

use crate::shared::time::now_utc;
use crate::statistics::application::{
    domain::entities::Statistics,
    ports::{
        incoming::use_cases::{GetStatisticsError, GetStatisticsUseCase},
        outgoing::{StatisticsRepository, StatisticsRepositoryError},
    },
};

fn map_err(e: StatisticsRepositoryError) -> GetStatisticsError {
    GetStatisticsError::RepositoryError(e.to_string())
}

#[derive(Debug, Clone)]
pub struct GetStatisticsService<R>
where
    R: StatisticsRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetStatisticsService<R>
where
    R: StatisticsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetStatisticsUseCase for GetStatisticsService<R>
where
    R: StatisticsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Statistics, GetStatisticsError> {
        if let Some(stats) = self.repository.find_current().await.map_err(map_err)? {
            return Ok(stats);
        }

        // not atomic, same caveat as the resume seed
        info!("No statistics stored yet, creating the defaults");
        self.repository
            .insert(Statistics::initial(now_utc()))
            .await
            .map_err(map_err)
    }
}
