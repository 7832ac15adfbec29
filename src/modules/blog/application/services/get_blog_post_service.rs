use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::BlogPost,
    ports::{
        incoming::use_cases::{GetBlogPostError, GetBlogPostUseCase},
        outgoing::BlogPostQuery,
    },
};
use crate::shared::document_id::DocumentId;

#[derive(Debug, Clone)]
pub struct GetBlogPostService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetBlogPostService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogPostUseCase for GetBlogPostService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    /// Unpublished posts are returned too; visibility only filters listings.
    async fn execute(&self, raw_id: &str) -> Result<BlogPost, GetBlogPostError> {
        let id = DocumentId::parse(raw_id).map_err(|_| GetBlogPostError::InvalidId)?;

        self.query
            .find_by_id(id)
            .await
            .map_err(|e| GetBlogPostError::QueryError(e.to_string()))?
            .ok_or(GetBlogPostError::NotFound)
    }
}
