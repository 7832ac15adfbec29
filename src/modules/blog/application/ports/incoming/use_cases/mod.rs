mod create_blog_post;
mod get_blog_categories;
mod get_blog_post;
mod get_blog_posts;
mod get_featured_blog_posts;

pub use create_blog_post::{
    BlogPostDraft, CreateBlogPostCommand, CreateBlogPostError, CreateBlogPostUseCase,
};
pub use get_blog_categories::GetBlogCategoriesUseCase;
pub use get_blog_post::{GetBlogPostError, GetBlogPostUseCase};
pub use get_blog_posts::{GetBlogPostsError, GetBlogPostsUseCase};
pub use get_featured_blog_posts::{GetFeaturedBlogPostsUseCase, FEATURED_POSTS_LIMIT};
