use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    testimonial::application::{
        domain::entities::Testimonial,
        ports::incoming::use_cases::{CreateTestimonialCommand, CreateTestimonialError},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Moderation flags sent by clients are ignored. Absent fields decode as
/// empty (or a zero rating) and fail validation under their own names.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTestimonialRequest {
    #[serde(default)]
    #[schema(example = "Priya Sharma", required = true)]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Director of Engineering", required = true)]
    pub position: String,
    #[serde(default)]
    #[schema(example = "Acme Corp", required = true)]
    pub company: String,
    #[serde(default)]
    #[schema(required = true)]
    pub content: String,
    #[serde(default)]
    #[schema(example = 5, minimum = 1, maximum = 5, required = true)]
    pub rating: i64,
    #[serde(default)]
    pub image: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Submit a testimonial for moderation
#[utoipa::path(
    post,
    path = "/api/testimonials",
    tag = "testimonials",
    request_body = CreateTestimonialRequest,
    responses(
        (status = 200, description = "Testimonial stored, pending approval", body = Testimonial),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/testimonials")]
pub async fn create_testimonial_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateTestimonialRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateTestimonialCommand::new(
        payload.name,
        payload.position,
        payload.company,
        payload.content,
        payload.rating,
        payload.image,
    ) {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(&errors),
    };

    match data.testimonial.create.execute(command).await {
        Ok(testimonial) => {
            info!(id = %testimonial.id, "Testimonial submitted");
            ApiResponse::success(testimonial)
        }
        Err(CreateTestimonialError::RepositoryError(msg)) => {
            error!("Error creating testimonial: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
