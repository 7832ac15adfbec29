use async_trait::async_trait;
use mongodb::{Collection, Database};

use super::blog_post_document::BlogPostDocument;
use crate::blog::application::{
    domain::entities::BlogPost,
    ports::outgoing::{BlogPostRepository, BlogPostRepositoryError, NewBlogPost},
};
use crate::shared::mongo::BLOG_POSTS;

#[derive(Debug, Clone)]
pub struct BlogPostRepositoryMongo {
    collection: Collection<BlogPostDocument>,
}

impl BlogPostRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(BLOG_POSTS),
        }
    }
}

#[async_trait]
impl BlogPostRepository for BlogPostRepositoryMongo {
    async fn insert(&self, data: NewBlogPost) -> Result<BlogPost, BlogPostRepositoryError> {
        let mut document = BlogPostDocument::from(data);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| BlogPostRepositoryError::DatabaseError(e.to_string()))?;

        document.id = result.inserted_id.as_object_id();
        Ok(document.into_post())
    }
}
