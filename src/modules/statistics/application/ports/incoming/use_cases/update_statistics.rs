use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::statistics::application::domain::entities::Statistics;

/// New counter values. Non-negativity is carried by the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatisticsCommand {
    pub years_of_experience: u32,
    pub teams_led: u32,
    pub projects_completed: u32,
    pub companies_worked: u32,
    pub technologies_used: u32,
}

impl UpdateStatisticsCommand {
    pub fn into_statistics(self, last_updated: DateTime<Utc>) -> Statistics {
        Statistics {
            years_of_experience: self.years_of_experience,
            teams_led: self.teams_led,
            projects_completed: self.projects_completed,
            companies_worked: self.companies_worked,
            technologies_used: self.technologies_used,
            last_updated,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateStatisticsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateStatisticsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateStatisticsCommand,
    ) -> Result<Statistics, UpdateStatisticsError>;
}
