use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::BlogPost,
    ports::{
        incoming::use_cases::{
            GetBlogPostsError, GetFeaturedBlogPostsUseCase, FEATURED_POSTS_LIMIT,
        },
        outgoing::{BlogPostFilter, BlogPostQuery, PageRequest},
    },
};

#[derive(Debug, Clone)]
pub struct GetFeaturedBlogPostsService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetFeaturedBlogPostsService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFeaturedBlogPostsUseCase for GetFeaturedBlogPostsService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BlogPost>, GetBlogPostsError> {
        self.query
            .list(
                BlogPostFilter::featured_and_published(),
                PageRequest::first(FEATURED_POSTS_LIMIT),
            )
            .await
            .map_err(|e| GetBlogPostsError::QueryError(e.to_string()))
    }
}
