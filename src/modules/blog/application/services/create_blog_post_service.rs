use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::BlogPost,
    ports::{
        incoming::use_cases::{CreateBlogPostCommand, CreateBlogPostError, CreateBlogPostUseCase},
        outgoing::{BlogPostRepository, NewBlogPost},
    },
};
use crate::shared::{owner::OWNER_NAME, time::now_utc};

#[derive(Debug, Clone)]
pub struct CreateBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateBlogPostUseCase for CreateBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateBlogPostCommand,
    ) -> Result<BlogPost, CreateBlogPostError> {
        let draft = command.into_draft();
        let now = now_utc();

        // date, createdAt and updatedAt all start at the creation instant
        let data = NewBlogPost {
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            date: now,
            read_time: draft.read_time,
            category: draft.category,
            tags: draft.tags,
            author: OWNER_NAME.to_string(),
            featured: draft.featured,
            published: draft.published,
            created_at: now,
            updated_at: now,
        };

        self.repository
            .insert(data)
            .await
            .map_err(|e| CreateBlogPostError::RepositoryError(e.to_string()))
    }
}
