use async_trait::async_trait;

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::{
        incoming::use_cases::{GetContactSubmissionError, GetContactSubmissionUseCase},
        outgoing::ContactRepository,
    },
};
use crate::shared::document_id::DocumentId;

#[derive(Debug, Clone)]
pub struct GetContactSubmissionService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetContactSubmissionService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetContactSubmissionUseCase for GetContactSubmissionService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, raw_id: &str) -> Result<ContactSubmission, GetContactSubmissionError> {
        let id = DocumentId::parse(raw_id).map_err(|_| GetContactSubmissionError::InvalidId)?;

        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| GetContactSubmissionError::RepositoryError(e.to_string()))?
            .ok_or(GetContactSubmissionError::NotFound)
    }
}
