use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    blog::application::{
        domain::entities::BlogPost,
        ports::incoming::use_cases::{BlogPostDraft, CreateBlogPostCommand, CreateBlogPostError},
    },
    shared::{
        api::ApiResponse,
        validation::{ValidationErrors, Validator},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Absent text fields decode as empty or `None` so that validation can name
/// each of them instead of failing on the first.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    #[serde(default)]
    #[schema(example = "Building Scalable AI Systems")]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    #[schema(example = "8 min read", required = true)]
    pub read_time: Option<String>,
    #[serde(default)]
    #[schema(required = true)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "published_by_default")]
    #[schema(default = true)]
    pub published: bool,
}

fn published_by_default() -> bool {
    true
}

impl CreateBlogPostRequest {
    /// `readTime` and `category` may be empty but must be sent.
    fn into_command(self) -> Result<CreateBlogPostCommand, ValidationErrors> {
        let presence = Validator::new()
            .required("readTime", self.read_time.is_some())
            .required("category", self.category.is_some())
            .finish();

        let draft = BlogPostDraft {
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            read_time: self.read_time.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            tags: self.tags,
            featured: self.featured,
            published: self.published,
        };

        match (presence, CreateBlogPostCommand::new(draft)) {
            (Ok(()), command) => command,
            (Err(missing), Ok(_)) => Err(missing),
            (Err(missing), Err(invalid)) => Err(missing.and(invalid)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/blog-posts",
    tag = "blog",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 200, description = "Post created", body = BlogPost),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/blog-posts")]
pub async fn create_blog_post_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateBlogPostRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(&errors),
    };

    match data.blog.create.execute(command).await {
        Ok(post) => {
            info!(id = %post.id, title = %post.title, "Blog post created");
            ApiResponse::success(post)
        }
        Err(CreateBlogPostError::RepositoryError(msg)) => {
            error!("Error creating blog post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
