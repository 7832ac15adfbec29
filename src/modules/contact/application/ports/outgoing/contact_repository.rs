use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::contact::application::domain::entities::ContactSubmission;
use crate::shared::document_id::DocumentId;

// Input DTO for storing a submission; id is assigned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(
        &self,
        data: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError>;

    /// Newest first, at most `limit` entries.
    async fn list_recent(&self, limit: i64)
        -> Result<Vec<ContactSubmission>, ContactRepositoryError>;

    async fn find_by_id(
        &self,
        id: DocumentId,
    ) -> Result<Option<ContactSubmission>, ContactRepositoryError>;
}
