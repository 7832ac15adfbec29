// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::validation::{FieldError, ValidationErrors};

#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ApiResponse {
    /// Successful bodies are the bare representation, the site client reads
    /// objects and arrays directly off the response.
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        Self::build(status, code, message, Vec::new())
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unprocessable(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNPROCESSABLE_ENTITY, code, message)
    }

    pub fn validation_failed(errors: &ValidationErrors) -> HttpResponse {
        Self::build(
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_ERROR",
            &errors.to_string(),
            errors.fields().to_vec(),
        )
    }

    pub fn service_unavailable(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::SERVICE_UNAVAILABLE, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }

    fn build(
        status: StatusCode,
        code: &str,
        message: &str,
        fields: Vec<FieldError>,
    ) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
                fields,
            },
        })
    }
}
