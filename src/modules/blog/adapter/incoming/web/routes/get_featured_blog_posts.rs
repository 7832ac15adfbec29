use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    blog::application::{
        domain::entities::BlogPost, ports::incoming::use_cases::GetBlogPostsError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Up to ten featured, published posts, newest first
#[utoipa::path(
    get,
    path = "/api/blog-posts/featured",
    tag = "blog",
    responses(
        (status = 200, description = "Featured posts", body = [BlogPost]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/blog-posts/featured")]
pub async fn get_featured_blog_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog.featured.execute().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(GetBlogPostsError::QueryError(msg)) => {
            error!("Error fetching featured posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
