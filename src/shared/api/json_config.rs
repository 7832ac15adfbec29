// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

/// Body decoding failures (malformed JSON, missing or mistyped fields) are
/// validation failures, not bad requests.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::unprocessable("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::unprocessable("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::unprocessable("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
