use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;
use crate::shared::mongo::MAX_LIST_RESULTS;

pub const CONTACT_LIST_LIMIT: i64 = MAX_LIST_RESULTS;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactSubmissionsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListContactSubmissionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListContactSubmissionsError>;
}
