use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, PartialEq)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogPostRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn insert(&self, data: NewBlogPost) -> Result<BlogPost, BlogPostRepositoryError>;
}
