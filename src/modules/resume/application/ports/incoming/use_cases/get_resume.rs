use async_trait::async_trait;

use crate::resume::application::domain::entities::Resume;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResumeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<Resume, GetResumeError>;
}
