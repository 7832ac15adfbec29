use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_YEARS_OF_EXPERIENCE: u32 = 14;
pub const DEFAULT_TEAMS_LED: u32 = 5;
pub const DEFAULT_PROJECTS_COMPLETED: u32 = 25;
pub const DEFAULT_COMPANIES_WORKED: u32 = 8;
pub const DEFAULT_TECHNOLOGIES_USED: u32 = 30;

/// Headline counters shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
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
    pub last_updated: DateTime<Utc>,
}

impl Statistics {
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            years_of_experience: DEFAULT_YEARS_OF_EXPERIENCE,
            teams_led: DEFAULT_TEAMS_LED,
            projects_completed: DEFAULT_PROJECTS_COMPLETED,
            companies_worked: DEFAULT_COMPANIES_WORKED,
            technologies_used: DEFAULT_TECHNOLOGIES_USED,
            last_updated: now,
        }
    }
}
