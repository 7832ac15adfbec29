use async_trait::async_trait;

use crate::resume::application::{
    domain::entities::Resume,
    ports::{
        incoming::use_cases::{UpdateResumeCommand, UpdateResumeError, UpdateResumeUseCase},
        outgoing::ResumeRepository,
    },
};
use crate::shared::time::now_utc;

#[derive(Debug, Clone)]
pub struct UpdateResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateResumeUseCase for UpdateResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateResumeCommand) -> Result<Resume, UpdateResumeError> {
        self.repository
            .replace(command.into_resume(now_utc()))
            .await
            .map_err(|e| UpdateResumeError::RepositoryError(e.to_string()))
    }
}
