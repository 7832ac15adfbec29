use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::{query::optional_flag, ApiResponse},
    testimonial::application::{
        domain::entities::Testimonial,
        ports::{incoming::use_cases::GetTestimonialsError, outgoing::TestimonialFilter},
    },
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetTestimonialsQuery {
    /// Defaults to `true`
    #[serde(default, deserialize_with = "optional_flag")]
    pub approved: Option<bool>,
    #[serde(default, deserialize_with = "optional_flag")]
    pub featured: Option<bool>,
}

impl From<GetTestimonialsQuery> for TestimonialFilter {
    fn from(query: GetTestimonialsQuery) -> Self {
        Self {
            approved: Some(query.approved.unwrap_or(true)),
            featured: query.featured,
        }
    }
}

/// List testimonials, newest first
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "testimonials",
    params(GetTestimonialsQuery),
    responses(
        (status = 200, description = "Matching testimonials", body = [Testimonial]),
        (status = 422, description = "Malformed query parameter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/testimonials")]
pub async fn get_testimonials_handler(
    data: web::Data<AppState>,
    query: web::Query<GetTestimonialsQuery>,
) -> impl Responder {
    match data.testimonial.list.execute(query.into_inner().into()).await {
        Ok(testimonials) => ApiResponse::success(testimonials),
        Err(GetTestimonialsError::RepositoryError(msg)) => {
            error!("Error fetching testimonials: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
