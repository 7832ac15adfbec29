use async_trait::async_trait;

use crate::contact::application::{
    domain::entities::{ContactSubmission, NEW_SUBMISSION_STATUS},
    ports::{
        incoming::use_cases::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase},
        outgoing::{ContactRepository, NewContactSubmission},
    },
};
use crate::shared::time::now_utc;

#[derive(Debug, Clone)]
pub struct SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactSubmission, SubmitContactError> {
        let data = NewContactSubmission {
            name: command.name().to_string(),
            email: command.email().to_string(),
            subject: command.subject().to_string(),
            message: command.message().to_string(),
            status: NEW_SUBMISSION_STATUS.to_string(),
            timestamp: now_utc(),
        };

        self.repository
            .insert(data)
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))
    }
}
