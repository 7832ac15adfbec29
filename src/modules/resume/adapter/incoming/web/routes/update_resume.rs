use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    resume::application::{
        domain::entities::{Education, PersonalInfo, Resume, DEFAULT_SUMMARY},
        ports::incoming::use_cases::{UpdateResumeCommand, UpdateResumeError},
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Full replacement of the resume. `lastUpdated` is assigned by the server.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResumeRequest {
    pub personal_info: PersonalInfo,
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default)]
    pub education: Vec<Education>,
}

fn default_summary() -> String {
    DEFAULT_SUMMARY.to_string()
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Replace the resume
#[utoipa::path(
    put,
    path = "/api/resume",
    tag = "resume",
    request_body = UpdateResumeRequest,
    responses(
        (status = 200, description = "Resume replaced", body = Resume),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/resume")]
pub async fn update_resume_handler(
    data: web::Data<AppState>,
    payload: web::Json<UpdateResumeRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command =
        match UpdateResumeCommand::new(payload.personal_info, payload.summary, payload.education) {
            Ok(cmd) => cmd,
            Err(errors) => return ApiResponse::validation_failed(&errors),
        };

    match data.resume.update.execute(command).await {
        Ok(resume) => {
            info!("Resume updated");
            ApiResponse::success(resume)
        }
        Err(UpdateResumeError::RepositoryError(msg)) => {
            error!("Error updating resume: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
