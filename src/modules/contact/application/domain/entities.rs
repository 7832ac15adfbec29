use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Status every submission starts (and, through this API, stays) in.
pub const NEW_SUBMISSION_STATUS: &str = "new";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[schema(example = "665f1c2e9b1e8a3d4c2b1a00")]
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Speaking invitation")]
    pub subject: String,
    pub message: String,
    #[schema(example = "new")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
