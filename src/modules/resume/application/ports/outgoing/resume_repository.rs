use async_trait::async_trait;

use crate::resume::application::domain::entities::Resume;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The collection holds at most one resume document.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn find_current(&self) -> Result<Option<Resume>, ResumeRepositoryError>;

    async fn insert(&self, resume: Resume) -> Result<Resume, ResumeRepositoryError>;

    /// Replaces the stored resume, inserting it when none exists.
    async fn replace(&self, resume: Resume) -> Result<Resume, ResumeRepositoryError>;
}
