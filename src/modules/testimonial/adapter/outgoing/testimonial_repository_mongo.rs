use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::shared::mongo::TESTIMONIALS;
use crate::testimonial::application::{
    domain::entities::Testimonial,
    ports::outgoing::{
        NewTestimonial, TestimonialFilter, TestimonialRepository, TestimonialRepositoryError,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestimonialDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    position: String,
    company: String,
    content: String,
    rating: u8,
    #[serde(default)]
    image: String,
    #[serde(default)]
    approved: bool,
    #[serde(default)]
    featured: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl From<NewTestimonial> for TestimonialDocument {
    fn from(data: NewTestimonial) -> Self {
        Self {
            id: None,
            name: data.name,
            position: data.position,
            company: data.company,
            content: data.content,
            rating: data.rating,
            image: data.image,
            approved: data.approved,
            featured: data.featured,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

impl TestimonialDocument {
    fn into_testimonial(self) -> Testimonial {
        Testimonial {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: self.name,
            position: self.position,
            company: self.company,
            content: self.content,
            rating: self.rating,
            image: self.image,
            approved: self.approved,
            featured: self.featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub(crate) fn build_testimonial_filter(filter: TestimonialFilter) -> Document {
    let mut query = Document::new();

    if let Some(approved) = filter.approved {
        query.insert("approved", approved);
    }
    if let Some(featured) = filter.featured {
        query.insert("featured", featured);
    }

    query
}

#[derive(Debug, Clone)]
pub struct TestimonialRepositoryMongo {
    collection: Collection<TestimonialDocument>,
}

impl TestimonialRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(TESTIMONIALS),
        }
    }
}

fn map_db_err(e: mongodb::error::Error) -> TestimonialRepositoryError {
    TestimonialRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryMongo {
    async fn insert(
        &self,
        data: NewTestimonial,
    ) -> Result<Testimonial, TestimonialRepositoryError> {
        let mut document = TestimonialDocument::from(data);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_db_err)?;

        document.id = result.inserted_id.as_object_id();
        Ok(document.into_testimonial())
    }

    async fn list(
        &self,
        filter: TestimonialFilter,
        limit: i64,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError> {
        let cursor = self
            .collection
            .find(build_testimonial_filter(filter))
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .await
            .map_err(map_db_err)?;

        let documents: Vec<TestimonialDocument> =
            cursor.try_collect().await.map_err(map_db_err)?;

        Ok(documents
            .into_iter()
            .map(TestimonialDocument::into_testimonial)
            .collect())
    }
}
