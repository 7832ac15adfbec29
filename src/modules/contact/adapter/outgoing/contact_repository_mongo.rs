use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::outgoing::{ContactRepository, ContactRepositoryError, NewContactSubmission},
};
use crate::shared::{document_id::DocumentId, mongo::CONTACT_SUBMISSIONS};

/// Stored shape of a submission; `_id` is left out on insert so the store
/// generates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    subject: String,
    message: String,
    status: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    timestamp: DateTime<Utc>,
}

impl From<NewContactSubmission> for ContactDocument {
    fn from(data: NewContactSubmission) -> Self {
        Self {
            id: None,
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            status: data.status,
            timestamp: data.timestamp,
        }
    }
}

impl ContactDocument {
    fn into_submission(self) -> ContactSubmission {
        ContactSubmission {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            status: self.status,
            timestamp: self.timestamp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactRepositoryMongo {
    collection: Collection<ContactDocument>,
}

impl ContactRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(CONTACT_SUBMISSIONS),
        }
    }
}

fn map_db_err(e: mongodb::error::Error) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ContactRepository for ContactRepositoryMongo {
    async fn insert(
        &self,
        data: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError> {
        let mut document = ContactDocument::from(data);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_db_err)?;

        document.id = result.inserted_id.as_object_id();
        Ok(document.into_submission())
    }

    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<ContactSubmission>, ContactRepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "timestamp": -1 })
            .limit(limit)
            .await
            .map_err(map_db_err)?;

        let documents: Vec<ContactDocument> = cursor.try_collect().await.map_err(map_db_err)?;

        Ok(documents
            .into_iter()
            .map(ContactDocument::into_submission)
            .collect())
    }

    async fn find_by_id(
        &self,
        id: DocumentId,
    ) -> Result<Option<ContactSubmission>, ContactRepositoryError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.object_id() })
            .await
            .map_err(map_db_err)?;

        Ok(document.map(ContactDocument::into_submission))
    }
}
