mod create_blog_post;
mod get_blog_categories;
mod get_blog_post;
mod get_blog_posts;
mod get_featured_blog_posts;

pub use create_blog_post::*;
pub use get_blog_categories::*;
pub use get_blog_post::*;
pub use get_blog_posts::*;
pub use get_featured_blog_posts::*;
