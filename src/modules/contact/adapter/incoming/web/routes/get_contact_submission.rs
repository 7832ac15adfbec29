use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    contact::application::{
        domain::entities::ContactSubmission,
        ports::incoming::use_cases::GetContactSubmissionError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Fetch one contact submission
#[utoipa::path(
    get,
    path = "/api/contact/{submission_id}",
    tag = "contact",
    params(("submission_id" = String, Path, description = "Submission id (24 hex chars)")),
    responses(
        (status = 200, description = "Submission found", body = ContactSubmission),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Submission not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/contact/{submission_id}")]
pub async fn get_contact_submission_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let submission_id = path.into_inner();

    match data.contact.get_single.execute(&submission_id).await {
        Ok(submission) => ApiResponse::success(submission),
        Err(err) => map_get_contact_submission_error(err),
    }
}

fn map_get_contact_submission_error(err: GetContactSubmissionError) -> actix_web::HttpResponse {
    match err {
        GetContactSubmissionError::InvalidId => {
            ApiResponse::bad_request("INVALID_ID", "Invalid submission ID")
        }
        GetContactSubmissionError::NotFound => {
            ApiResponse::not_found("CONTACT_SUBMISSION_NOT_FOUND", "Contact submission not found")
        }
        GetContactSubmissionError::RepositoryError(msg) => {
            error!("Error fetching contact submission: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
