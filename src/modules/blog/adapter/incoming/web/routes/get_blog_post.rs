use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    blog::application::{
        domain::entities::BlogPost, ports::incoming::use_cases::GetBlogPostError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Fetch one blog post, published or not
#[utoipa::path(
    get,
    path = "/api/blog-posts/{post_id}",
    tag = "blog",
    params(("post_id" = String, Path, description = "Post id (24 hex chars)")),
    responses(
        (status = 200, description = "Post found", body = BlogPost),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/blog-posts/{post_id}")]
pub async fn get_blog_post_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.get_single.execute(&post_id).await {
        Ok(post) => ApiResponse::success(post),
        Err(err) => map_get_blog_post_error(err),
    }
}

fn map_get_blog_post_error(err: GetBlogPostError) -> actix_web::HttpResponse {
    match err {
        GetBlogPostError::InvalidId => ApiResponse::bad_request("INVALID_ID", "Invalid post ID"),
        GetBlogPostError::NotFound => {
            ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found")
        }
        GetBlogPostError::QueryError(msg) => {
            error!("Error fetching blog post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::blog::application::ports::incoming::use_cases::GetBlogPostUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct FailingGetBlogPostUseCase(GetBlogPostError);

    #[async_trait]
    impl GetBlogPostUseCase for FailingGetBlogPostUseCase {
        async fn execute(&self, _raw_id: &str) -> Result<BlogPost, GetBlogPostError> {
            Err(self.0.clone())
        }
    }

    async fn call(err: GetBlogPostError) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_get_blog_post(FailingGetBlogPostUseCase(err))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_blog_post_handler))
            .await;

        let req = test::TestRequest::get()
            .uri("/api/blog-posts/507f1f77bcf86cd799439011")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body_json(resp).await;

        (status, body)
    }

    #[actix_web::test]
    async fn invalid_id_is_bad_request() {
        let (status, body) = call(GetBlogPostError::InvalidId).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ID");
        assert_eq!(body["error"]["message"], "Invalid post ID");
    }

    #[actix_web::test]
    async fn missing_post_is_not_found() {
        let (status, body) = call(GetBlogPostError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "BLOG_POST_NOT_FOUND");
    }

    #[actix_web::test]
    async fn query_error_is_internal() {
        let (status, body) = call(GetBlogPostError::QueryError("socket".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("socket"));
    }
}
