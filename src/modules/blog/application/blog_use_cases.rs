use std::sync::Arc;

use crate::blog::application::ports::incoming::use_cases::{
    CreateBlogPostUseCase, GetBlogCategoriesUseCase, GetBlogPostUseCase, GetBlogPostsUseCase,
    GetFeaturedBlogPostsUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub create: Arc<dyn CreateBlogPostUseCase + Send + Sync>,
    pub list: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
    pub featured: Arc<dyn GetFeaturedBlogPostsUseCase + Send + Sync>,
    pub categories: Arc<dyn GetBlogCategoriesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetBlogPostUseCase + Send + Sync>,
}
