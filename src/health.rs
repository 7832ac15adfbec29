use actix_web::{get, web, HttpResponse, Responder};
use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

/// Reachability check for the backing store, registered as
/// `web::Data<dyn DatabaseProbe>`.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn ping(&self) -> Result<(), String>;
}

#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Portfolio API is running")]
    message: &'static str,
    #[schema(example = "1.0.0")]
    version: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    status: &'static str,
    #[schema(example = "ok")]
    database: &'static str,
}

/// API banner
#[utoipa::path(
    get,
    path = "/api/",
    tag = "system",
    responses((status = 200, description = "API is running", body = RootResponse))
)]
#[get("/api/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Portfolio API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "system",
    responses((status = 200, description = "Process is alive", body = HealthResponse))
)]
#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the database
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "system",
    responses(
        (status = 200, description = "Database reachable", body = ReadinessResponse),
        (status = 503, description = "Database unreachable", body = ReadinessResponse)
    )
)]
#[get("/api/ready")]
pub async fn readiness(probe: web::Data<dyn DatabaseProbe>) -> impl Responder {
    match probe.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: "ok",
        }),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                database: "unhealthy",
            })
        }
    }
}
