use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::BlogPost,
    ports::{
        incoming::use_cases::{GetBlogPostsError, GetBlogPostsUseCase},
        outgoing::{BlogPostFilter, BlogPostQuery, PageRequest},
    },
};

#[derive(Debug, Clone)]
pub struct GetBlogPostsService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetBlogPostsService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogPostsUseCase for GetBlogPostsService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: BlogPostFilter,
        page: PageRequest,
    ) -> Result<Vec<BlogPost>, GetBlogPostsError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| GetBlogPostsError::QueryError(e.to_string()))
    }
}
