use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    resume::application::{domain::entities::Resume, ports::incoming::use_cases::GetResumeError},
    shared::api::ApiResponse,
    AppState,
};

/// Current resume, created with the owner's defaults on first access
#[utoipa::path(
    get,
    path = "/api/resume",
    tag = "resume",
    responses(
        (status = 200, description = "Resume", body = Resume),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume.get.execute().await {
        Ok(resume) => ApiResponse::success(resume),
        Err(GetResumeError::RepositoryError(msg)) => {
            error!("Error fetching resume: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn resume_body_has_no_id() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(App::new().app_data(state).service(get_resume_handler)).await;

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["personalInfo"]["name"], "Dewanshu Singh Sisaudiya");
        assert!(body.get("id").is_none());
        assert!(body.get("_id").is_none());
    }

    struct BrokenGetResumeUseCase;

    #[async_trait::async_trait]
    impl crate::resume::application::ports::incoming::use_cases::GetResumeUseCase
        for BrokenGetResumeUseCase
    {
        async fn execute(&self) -> Result<Resume, GetResumeError> {
            Err(GetResumeError::RepositoryError("connection reset".into()))
        }
    }

    #[actix_web::test]
    async fn store_failure_is_internal() {
        let state = TestAppStateBuilder::default()
            .with_get_resume(BrokenGetResumeUseCase)
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_resume_handler)).await;

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
