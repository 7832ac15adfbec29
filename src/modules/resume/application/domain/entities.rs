use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::owner::{
    OWNER_EMAIL, OWNER_GITHUB, OWNER_LINKEDIN, OWNER_LOCATION, OWNER_NAME, OWNER_PHONE,
    OWNER_TITLE,
};

pub const DEFAULT_SUMMARY: &str = "Experienced engineering leader with 14+ years in software \
                                   development, team management, and AI integration.";

/// Contact block of the resume. Omitted fields fall back to the owner's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PersonalInfo {
    #[schema(example = "Dewanshu Singh Sisaudiya")]
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: OWNER_NAME.to_string(),
            title: OWNER_TITLE.to_string(),
            email: OWNER_EMAIL.to_string(),
            phone: OWNER_PHONE.to_string(),
            location: OWNER_LOCATION.to_string(),
            linkedin: OWNER_LINKEDIN.to_string(),
            github: OWNER_GITHUB.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    #[schema(example = "B.Tech. in Information Technology")]
    pub degree: String,
    #[schema(example = "UNSIET Jaunpur")]
    pub institution: String,
    #[schema(example = "2007-2011")]
    pub year: String,
    #[schema(example = "India")]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub last_updated: DateTime<Utc>,
}

impl Resume {
    /// Resume served before the owner has saved one.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            summary: DEFAULT_SUMMARY.to_string(),
            education: vec![Education {
                degree: "B.Tech. in Information Technology".to_string(),
                institution: "UNSIET Jaunpur".to_string(),
                year: "2007-2011".to_string(),
                location: "India".to_string(),
            }],
            last_updated: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::time::now_utc;

    #[test]
    fn initial_resume_describes_the_owner() {
        let resume = Resume::initial(now_utc());

        assert_eq!(resume.personal_info.name, "Dewanshu Singh Sisaudiya");
        assert_eq!(resume.personal_info.location, "Bangalore, India");
        assert!(resume.summary.starts_with("Experienced engineering leader"));
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].institution, "UNSIET Jaunpur");
    }

    #[test]
    fn partial_personal_info_is_filled_from_owner() {
        let info: PersonalInfo =
            serde_json::from_value(serde_json::json!({ "phone": "+1 555 0100" })).unwrap();

        assert_eq!(info.phone, "+1 555 0100");
        assert_eq!(info.name, "Dewanshu Singh Sisaudiya");
        assert_eq!(info.github, "https://github.com/dewanshu-sisaudiya");
    }

    #[test]
    fn serialized_resume_is_camel_case_without_id() {
        let json = serde_json::to_value(Resume::initial(now_utc())).unwrap();

        assert!(json.get("personalInfo").is_some());
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("id").is_none());
        assert!(json.get("_id").is_none());
    }
}
