use async_trait::async_trait;

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::{
        incoming::use_cases::{
            ListContactSubmissionsError, ListContactSubmissionsUseCase, CONTACT_LIST_LIMIT,
        },
        outgoing::ContactRepository,
    },
};

#[derive(Debug, Clone)]
pub struct ListContactSubmissionsService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListContactSubmissionsService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListContactSubmissionsUseCase for ListContactSubmissionsService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListContactSubmissionsError> {
        self.repository
            .list_recent(CONTACT_LIST_LIMIT)
            .await
            .map_err(|e| ListContactSubmissionsError::RepositoryError(e.to_string()))
    }
}
