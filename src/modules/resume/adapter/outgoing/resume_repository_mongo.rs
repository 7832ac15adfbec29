use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{doc, serde_helpers::chrono_datetime_as_bson_datetime},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::resume::application::{
    domain::entities::{Education, PersonalInfo, Resume, DEFAULT_SUMMARY},
    ports::outgoing::{ResumeRepository, ResumeRepositoryError},
};
use crate::shared::mongo::RESUME;

/// Stored shape of the resume singleton. `_id` is never declared, so the
/// store-generated key is dropped on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResumeDocument {
    #[serde(default)]
    personal_info: PersonalInfo,
    #[serde(default = "default_summary")]
    summary: String,
    #[serde(default)]
    education: Vec<Education>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    last_updated: DateTime<Utc>,
}

fn default_summary() -> String {
    DEFAULT_SUMMARY.to_string()
}

impl From<Resume> for ResumeDocument {
    fn from(resume: Resume) -> Self {
        Self {
            personal_info: resume.personal_info,
            summary: resume.summary,
            education: resume.education,
            last_updated: resume.last_updated,
        }
    }
}

impl From<ResumeDocument> for Resume {
    fn from(document: ResumeDocument) -> Self {
        Self {
            personal_info: document.personal_info,
            summary: document.summary,
            education: document.education,
            last_updated: document.last_updated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResumeRepositoryMongo {
    collection: Collection<ResumeDocument>,
}

impl ResumeRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(RESUME),
        }
    }
}

fn map_db_err(e: mongodb::error::Error) -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ResumeRepository for ResumeRepositoryMongo {
    async fn find_current(&self) -> Result<Option<Resume>, ResumeRepositoryError> {
        let document = self
            .collection
            .find_one(doc! {})
            .await
            .map_err(map_db_err)?;

        Ok(document.map(Resume::from))
    }

    async fn insert(&self, resume: Resume) -> Result<Resume, ResumeRepositoryError> {
        let document = ResumeDocument::from(resume);

        self.collection
            .insert_one(&document)
            .await
            .map_err(map_db_err)?;

        Ok(document.into())
    }

    async fn replace(&self, resume: Resume) -> Result<Resume, ResumeRepositoryError> {
        let document = ResumeDocument::from(resume);

        self.collection
            .replace_one(doc! {}, &document)
            .upsert(true)
            .await
            .map_err(map_db_err)?;

        Ok(document.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, oid::ObjectId, Bson, DateTime as BsonDateTime};

    use crate::shared::time::now_utc;

    #[test]
    fn stored_shape_is_camel_case_and_id_free() {
        let stored = bson::to_document(&ResumeDocument::from(Resume::initial(now_utc()))).unwrap();

        assert!(!stored.contains_key("_id"));
        assert!(stored.contains_key("personalInfo"));
        assert!(matches!(stored.get("lastUpdated"), Some(Bson::DateTime(_))));
        assert_eq!(
            stored
                .get_document("personalInfo")
                .unwrap()
                .get_str("name")
                .unwrap(),
            "Dewanshu Singh Sisaudiya"
        );
    }

    #[test]
    fn read_back_drops_store_id() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "personalInfo": { "name": "Someone Else" },
            "lastUpdated": BsonDateTime::now(),
        };

        let resume: Resume = bson::from_document::<ResumeDocument>(stored).unwrap().into();

        assert_eq!(resume.personal_info.name, "Someone Else");
        assert_eq!(resume.personal_info.location, "Bangalore, India");
        assert_eq!(resume.summary, DEFAULT_SUMMARY);
        assert!(resume.education.is_empty());
    }
}
