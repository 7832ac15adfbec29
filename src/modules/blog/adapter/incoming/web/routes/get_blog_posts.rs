use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    api::schemas::ErrorResponse,
    blog::application::{
        domain::entities::BlogPost,
        ports::{
            incoming::use_cases::GetBlogPostsError,
            outgoing::{BlogPostFilter, PageRequest},
        },
    },
    shared::api::{
        query::{non_empty, optional_flag},
        ApiResponse,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetBlogPostsQuery {
    /// Exact category
    pub category: Option<String>,
    /// Case-insensitive text searched in title, excerpt, content and tags
    pub search: Option<String>,
    #[serde(default, deserialize_with = "optional_flag")]
    pub featured: Option<bool>,
    /// Defaults to `true`
    #[serde(default, deserialize_with = "optional_flag")]
    pub published: Option<bool>,
    /// Page size, clamped to 1..=100, default 10
    pub limit: Option<i64>,
    /// Number of posts to skip, default 0
    pub skip: Option<u64>,
}

impl GetBlogPostsQuery {
    fn into_parts(self) -> (BlogPostFilter, PageRequest) {
        let filter = BlogPostFilter {
            category: non_empty(self.category),
            search: non_empty(self.search),
            featured: self.featured,
            published: Some(self.published.unwrap_or(true)),
        };

        (filter, PageRequest::new(self.limit, self.skip))
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// List blog posts, newest first
#[utoipa::path(
    get,
    path = "/api/blog-posts",
    tag = "blog",
    params(GetBlogPostsQuery),
    responses(
        (status = 200, description = "Matching posts", body = [BlogPost]),
        (status = 422, description = "Malformed query parameter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/blog-posts")]
pub async fn get_blog_posts_handler(
    data: web::Data<AppState>,
    query: web::Query<GetBlogPostsQuery>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into_parts();

    match data.blog.list.execute(filter, page).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(GetBlogPostsError::QueryError(msg)) => {
            error!("Error fetching blog posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
