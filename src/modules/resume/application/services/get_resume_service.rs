use async_trait::async_trait;
use tracing::info;

use crate::resume::application::{
    domain::entities::Resume,
    ports::{
        incoming::use_cases::{GetResumeError, GetResumeUseCase},
        outgoing::{ResumeRepository, ResumeRepositoryError},
    },
};
use crate::shared::time::now_utc;

fn map_err(e: ResumeRepositoryError) -> GetResumeError {
    GetResumeError::RepositoryError(e.to_string())
}

#[derive(Debug, Clone)]
pub struct GetResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetResumeUseCase for GetResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    /// Seeds the default resume on first read. Two concurrent first reads
    /// may both insert; the store has no uniqueness constraint to stop it.
    async fn execute(&self) -> Result<Resume, GetResumeError> {
        if let Some(resume) = self.repository.find_current().await.map_err(map_err)? {
            return Ok(resume);
        }

        info!("No resume stored yet, creating the default one");
        self.repository
            .insert(Resume::initial(now_utc()))
            .await
            .map_err(map_err)
    }
}
