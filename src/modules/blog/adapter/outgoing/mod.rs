mod blog_post_document;
mod blog_post_query_mongo;
mod blog_post_repository_mongo;

pub use blog_post_query_mongo::BlogPostQueryMongo;
pub use blog_post_repository_mongo::BlogPostRepositoryMongo;
