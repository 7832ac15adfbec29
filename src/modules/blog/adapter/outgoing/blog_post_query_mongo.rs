// src/modules/blog/adapter/outgoing/blog_post_query_mongo.rs

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    Collection, Database,
};

use super::blog_post_document::BlogPostDocument;
use crate::blog::application::{
    domain::entities::BlogPost,
    ports::outgoing::{BlogPostFilter, BlogPostQuery, BlogPostQueryError, PageRequest},
};
use crate::shared::{document_id::DocumentId, mongo::BLOG_POSTS};

const SEARCH_FIELDS: [&str; 4] = ["title", "excerpt", "content", "tags"];

#[derive(Debug, Clone)]
pub struct BlogPostQueryMongo {
    collection: Collection<BlogPostDocument>,
}

impl BlogPostQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(BLOG_POSTS),
        }
    }
}

fn map_db_err(e: mongodb::error::Error) -> BlogPostQueryError {
    BlogPostQueryError::DatabaseError(e.to_string())
}

/// Translates a listing filter into a store query. Search text is matched
/// literally, so regex metacharacters in user input have no effect.
pub(crate) fn build_list_filter(filter: &BlogPostFilter) -> Document {
    let mut query = Document::new();

    if let Some(published) = filter.published {
        query.insert("published", published);
    }

    if let Some(featured) = filter.featured {
        query.insert("featured", featured);
    }

    if let Some(category) = &filter.category {
        query.insert("category", category.as_str());
    }

    if let Some(search) = &filter.search {
        let pattern = regex::escape(search);
        let clauses: Vec<Document> = SEARCH_FIELDS
            .iter()
            .map(|field| {
                let mut clause = Document::new();
                clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                clause
            })
            .collect();
        query.insert("$or", clauses);
    }

    query
}

#[async_trait]
impl BlogPostQuery for BlogPostQueryMongo {
    async fn list(
        &self,
        filter: BlogPostFilter,
        page: PageRequest,
    ) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        let cursor = self
            .collection
            .find(build_list_filter(&filter))
            .sort(doc! { "date": -1 })
            .skip(page.skip())
            .limit(page.limit())
            .await
            .map_err(map_db_err)?;

        let documents: Vec<BlogPostDocument> = cursor.try_collect().await.map_err(map_db_err)?;

        Ok(documents
            .into_iter()
            .map(BlogPostDocument::into_post)
            .collect())
    }

    async fn published_categories(&self) -> Result<Vec<String>, BlogPostQueryError> {
        let values = self
            .collection
            .distinct("category", doc! { "published": true })
            .await
            .map_err(map_db_err)?;

        let mut categories: Vec<String> = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(category) => Some(category),
                _ => None,
            })
            .collect();
        categories.sort();

        Ok(categories)
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<BlogPost>, BlogPostQueryError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.object_id() })
            .await
            .map_err(map_db_err)?;

        Ok(document.map(BlogPostDocument::into_post))
    }
}
