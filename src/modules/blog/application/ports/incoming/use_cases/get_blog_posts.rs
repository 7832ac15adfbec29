use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::BlogPost,
    ports::outgoing::{BlogPostFilter, PageRequest},
};

/// Read failure shared by the blog listing use cases.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogPostsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetBlogPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: BlogPostFilter,
        page: PageRequest,
    ) -> Result<Vec<BlogPost>, GetBlogPostsError>;
}
