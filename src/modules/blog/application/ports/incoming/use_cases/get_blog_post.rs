use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogPostError {
    #[error("Invalid post id")]
    InvalidId,

    #[error("Blog post not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetBlogPostUseCase: Send + Sync {
    async fn execute(&self, raw_id: &str) -> Result<BlogPost, GetBlogPostError>;
}
