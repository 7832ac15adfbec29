mod create_blog_post_service;
mod get_blog_categories_service;
mod get_blog_post_service;
mod get_blog_posts_service;
mod get_featured_blog_posts_service;

pub use create_blog_post_service::CreateBlogPostService;
pub use get_blog_categories_service::GetBlogCategoriesService;
pub use get_blog_post_service::GetBlogPostService;
pub use get_blog_posts_service::GetBlogPostsService;
pub use get_featured_blog_posts_service::GetFeaturedBlogPostsService;
