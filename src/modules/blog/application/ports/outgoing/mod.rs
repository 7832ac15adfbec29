mod blog_post_query;
mod blog_post_repository;

pub use blog_post_query::{
    BlogPostFilter, BlogPostQuery, BlogPostQueryError, PageRequest, DEFAULT_PAGE_LIMIT,
    MAX_PAGE_LIMIT,
};
pub use blog_post_repository::{BlogPostRepository, BlogPostRepositoryError, NewBlogPost};
