use async_trait::async_trait;

use super::GetBlogPostsError;
use crate::blog::application::domain::entities::BlogCategories;

#[async_trait]
pub trait GetBlogCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<BlogCategories, GetBlogPostsError>;
}
