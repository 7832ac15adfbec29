use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    statistics::application::{
        domain::entities::{
            Statistics, DEFAULT_COMPANIES_WORKED, DEFAULT_PROJECTS_COMPLETED,
            DEFAULT_TEAMS_LED, DEFAULT_TECHNOLOGIES_USED, DEFAULT_YEARS_OF_EXPERIENCE,
        },
        ports::incoming::use_cases::{UpdateStatisticsCommand, UpdateStatisticsError},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Full replacement of the counters; omitted ones reset to their defaults.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateStatisticsRequest {
    #[schema(example = 14)]
    pub years_of_experience: u32,
    #[schema(example = 5)]
    pub teams_led: u32,
    #[schema(example = 25)]
    pub projects_completed: u32,
    #[schema(example = 8)]
    pub companies_worked: u32,
    #[schema(example = 30)]
    pub technologies_used: u32,
}

impl Default for UpdateStatisticsRequest {
    fn default() -> Self {
        Self {
            years_of_experience: DEFAULT_YEARS_OF_EXPERIENCE,
            teams_led: DEFAULT_TEAMS_LED,
            projects_completed: DEFAULT_PROJECTS_COMPLETED,
            companies_worked: DEFAULT_COMPANIES_WORKED,
            technologies_used: DEFAULT_TECHNOLOGIES_USED,
        }
    }
}

impl From<UpdateStatisticsRequest> for UpdateStatisticsCommand {
    fn from(req: UpdateStatisticsRequest) -> Self {
        Self {
            years_of_experience: req.years_of_experience,
            teams_led: req.teams_led,
            projects_completed: req.projects_completed,
            companies_worked: req.companies_worked,
            technologies_used: req.technologies_used,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Replace the statistics
#[utoipa::path(
    put,
    path = "/api/statistics",
    tag = "statistics",
    request_body = UpdateStatisticsRequest,
    responses(
        (status = 200, description = "Statistics replaced", body = Statistics),
        (status = 422, description = "Negative or non-integer counter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/statistics")]
pub async fn update_statistics_handler(
    data: web::Data<AppState>,
    payload: web::Json<UpdateStatisticsRequest>,
) -> impl Responder {
    match data.statistics.update.execute(payload.into_inner().into()).await {
        Ok(stats) => {
            info!("Statistics updated");
            ApiResponse::success(stats)
        }
        Err(UpdateStatisticsError::RepositoryError(msg)) => {
            error!("Error updating statistics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn put(body: serde_json::Value) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(update_statistics_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/statistics")
            .set_json(body)
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn counters_are_replaced() {
        let resp = put(serde_json::json!({
            "yearsOfExperience": 15,
            "teamsLed": 6,
            "projectsCompleted": 30,
            "companiesWorked": 9,
            "technologiesUsed": 35
        }))
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["yearsOfExperience"], 15);
        assert_eq!(body["technologiesUsed"], 35);
        assert!(body["lastUpdated"].is_string());
    }

    #[actix_web::test]
    async fn omitted_counters_reset_to_defaults() {
        let resp = put(serde_json::json!({ "teamsLed": 9 })).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["teamsLed"], 9);
        assert_eq!(body["yearsOfExperience"], 14);
    }

    #[actix_web::test]
    async fn negative_counter_is_unprocessable() {
        let resp = put(serde_json::json!({ "teamsLed": -1 })).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    struct BrokenUpdateStatisticsUseCase;

    #[async_trait::async_trait]
    impl crate::statistics::application::ports::incoming::use_cases::UpdateStatisticsUseCase
        for BrokenUpdateStatisticsUseCase
    {
        async fn execute(
            &self,
            _command: UpdateStatisticsCommand,
        ) -> Result<Statistics, UpdateStatisticsError> {
            Err(UpdateStatisticsError::RepositoryError("not primary".into()))
        }
    }

    #[actix_web::test]
    async fn store_failure_is_internal() {
        let state = TestAppStateBuilder::default()
            .with_update_statistics(BrokenUpdateStatisticsUseCase)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(update_statistics_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/statistics")
            .set_json(serde_json::json!({ "teamsLed": 6 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
