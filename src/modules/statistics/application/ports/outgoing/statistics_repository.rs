use async_trait::async_trait;

use crate::statistics::application::domain::entities::Statistics;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatisticsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    async fn find_current(&self) -> Result<Option<Statistics>, StatisticsRepositoryError>;

    async fn insert(&self, stats: Statistics) -> Result<Statistics, StatisticsRepositoryError>;

    /// Insert-or-replace of the single statistics document.
    async fn replace(&self, stats: Statistics) -> Result<Statistics, StatisticsRepositoryError>;
}
