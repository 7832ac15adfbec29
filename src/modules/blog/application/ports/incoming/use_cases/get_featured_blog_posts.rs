use async_trait::async_trait;

use super::GetBlogPostsError;
use crate::blog::application::domain::entities::BlogPost;

pub const FEATURED_POSTS_LIMIT: i64 = 10;

#[async_trait]
pub trait GetFeaturedBlogPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogPost>, GetBlogPostsError>;
}
