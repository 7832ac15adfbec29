use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    contact::application::{
        domain::entities::ContactSubmission,
        ports::incoming::use_cases::{SubmitContactCommand, SubmitContactError},
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Contact form payload. Absent fields decode as empty and are reported by
/// name during validation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    #[serde(default)]
    #[schema(example = "Jane Doe", required = true)]
    pub name: String,
    #[serde(default)]
    #[schema(example = "jane@example.com", required = true)]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Speaking invitation", required = true)]
    pub subject: String,
    #[serde(default)]
    #[schema(example = "Would you talk at our meetup?", required = true)]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 200, description = "Submission stored", body = ContactSubmission),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitContactRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match SubmitContactCommand::new(
        payload.name,
        payload.email,
        payload.subject,
        payload.message,
    ) {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(&errors),
    };

    match data.contact.submit.execute(command).await {
        Ok(submission) => {
            info!(id = %submission.id, "Contact submission stored");
            ApiResponse::success(submission)
        }
        Err(SubmitContactError::RepositoryError(msg)) => {
            error!("Error submitting contact form: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
