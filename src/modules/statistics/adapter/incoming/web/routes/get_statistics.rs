use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    statistics::application::{
        domain::entities::Statistics, ports::incoming::use_cases::GetStatisticsError,
    },
    AppState,
};

/// Current statistics, created with defaults on first access
#[utoipa::path(
    get,
    path = "/api/statistics",
    tag = "statistics",
    responses(
        (status = 200, description = "Statistics", body = Statistics),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/statistics")]
pub async fn get_statistics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.statistics.get.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetStatisticsError::RepositoryError(msg)) => {
            error!("Error fetching statistics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
