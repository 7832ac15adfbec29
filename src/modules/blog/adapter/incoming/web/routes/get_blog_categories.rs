use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    blog::application::{
        domain::entities::BlogCategories, ports::incoming::use_cases::GetBlogPostsError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Distinct categories of published posts
#[utoipa::path(
    get,
    path = "/api/blog-posts/categories",
    tag = "blog",
    responses(
        (status = 200, description = "Category names", body = BlogCategories),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/blog-posts/categories")]
pub async fn get_blog_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog.categories.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(GetBlogPostsError::QueryError(msg)) => {
            error!("Error fetching categories: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
