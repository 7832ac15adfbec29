use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactSubmissionError {
    #[error("Invalid submission id")]
    InvalidId,

    #[error("Contact submission not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetContactSubmissionUseCase: Send + Sync {
    async fn execute(&self, raw_id: &str) -> Result<ContactSubmission, GetContactSubmissionError>;
}
