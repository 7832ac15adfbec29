use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    contact::application::{
        domain::entities::ContactSubmission,
        ports::incoming::use_cases::ListContactSubmissionsError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// List contact submissions, newest first
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Submissions, newest first", body = [ContactSubmission]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/contact")]
pub async fn get_contact_submissions_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.list.execute().await {
        Ok(submissions) => ApiResponse::success(submissions),
        Err(ListContactSubmissionsError::RepositoryError(msg)) => {
            error!("Error fetching contact submissions: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
