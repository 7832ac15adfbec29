use async_trait::async_trait;

use crate::resume::application::domain::entities::{Education, PersonalInfo, Resume};
use crate::shared::validation::{ValidationErrors, Validator};

//
// ──────────────────────────────────────────────────────────
// Update Resume Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateResumeCommand {
    personal_info: PersonalInfo,
    summary: String,
    education: Vec<Education>,
}

impl UpdateResumeCommand {
    pub fn new(
        personal_info: PersonalInfo,
        summary: String,
        education: Vec<Education>,
    ) -> Result<Self, ValidationErrors> {
        let validator = education
            .iter()
            .enumerate()
            .fold(Validator::new(), |v, (i, entry)| {
                v.length(&format!("education[{i}].degree"), &entry.degree, 1, None)
                    .length(&format!("education[{i}].institution"), &entry.institution, 1, None)
                    .length(&format!("education[{i}].year"), &entry.year, 1, None)
                    .length(&format!("education[{i}].location"), &entry.location, 1, None)
            });
        validator.finish()?;

        Ok(Self {
            personal_info,
            summary,
            education,
        })
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    /// Full replacement value stamped with `last_updated`.
    pub fn into_resume(self, last_updated: chrono::DateTime<chrono::Utc>) -> Resume {
        Resume {
            personal_info: self.personal_info,
            summary: self.summary,
            education: self.education,
            last_updated,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateResumeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateResumeUseCase: Send + Sync {
    async fn execute(&self, command: UpdateResumeCommand) -> Result<Resume, UpdateResumeError>;
}
