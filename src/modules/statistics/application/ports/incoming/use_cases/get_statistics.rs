use async_trait::async_trait;

use crate::statistics::application::domain::entities::Statistics;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStatisticsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetStatisticsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Statistics, GetStatisticsError>;
}
