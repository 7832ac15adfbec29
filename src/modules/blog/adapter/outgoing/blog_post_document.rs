use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use serde::{Deserialize, Serialize};

use crate::blog::application::{domain::entities::BlogPost, ports::outgoing::NewBlogPost};

/// Stored shape of a blog post. Older documents may lack the optional
/// fields, so every non-core field falls back to its default on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BlogPostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(super) id: Option<ObjectId>,
    pub(super) title: String,
    pub(super) excerpt: String,
    pub(super) content: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub(super) date: DateTime<Utc>,
    #[serde(default)]
    pub(super) read_time: String,
    #[serde(default)]
    pub(super) category: String,
    #[serde(default)]
    pub(super) tags: Vec<String>,
    #[serde(default)]
    pub(super) author: String,
    #[serde(default)]
    pub(super) featured: bool,
    #[serde(default = "default_published")]
    pub(super) published: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub(super) created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub(super) updated_at: DateTime<Utc>,
}

fn default_published() -> bool {
    true
}

impl From<NewBlogPost> for BlogPostDocument {
    fn from(data: NewBlogPost) -> Self {
        Self {
            id: None,
            title: data.title,
            excerpt: data.excerpt,
            content: data.content,
            date: data.date,
            read_time: data.read_time,
            category: data.category,
            tags: data.tags,
            author: data.author,
            featured: data.featured,
            published: data.published,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

impl BlogPostDocument {
    pub(super) fn into_post(self) -> BlogPost {
        BlogPost {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            date: self.date,
            read_time: self.read_time,
            category: self.category,
            tags: self.tags,
            author: self.author,
            featured: self.featured,
            published: self.published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, Bson, DateTime as BsonDateTime};

    use crate::shared::time::now_utc;

    fn new_post() -> NewBlogPost {
        let now = now_utc();
        NewBlogPost {
            title: "Title".into(),
            excerpt: "Excerpt".into(),
            content: "Content".into(),
            date: now,
            read_time: "3 min read".into(),
            category: "Leadership".into(),
            tags: vec!["Teams".into()],
            author: "Dewanshu Singh Sisaudiya".into(),
            featured: false,
            published: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn stored_fields_are_camel_case() {
        let stored = bson::to_document(&BlogPostDocument::from(new_post())).unwrap();

        assert!(!stored.contains_key("_id"));
        assert_eq!(stored.get_str("readTime").unwrap(), "3 min read");
        assert!(matches!(stored.get("createdAt"), Some(Bson::DateTime(_))));
        assert!(matches!(stored.get("updatedAt"), Some(Bson::DateTime(_))));
        assert!(matches!(stored.get("date"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn sparse_document_reads_with_defaults() {
        let oid = ObjectId::new();
        let now = BsonDateTime::now();
        let stored = doc! {
            "_id": oid,
            "title": "Old post",
            "excerpt": "From before tags existed",
            "content": "...",
            "date": now,
            "createdAt": now,
            "updatedAt": now,
        };

        let post = bson::from_document::<BlogPostDocument>(stored)
            .unwrap()
            .into_post();

        assert_eq!(post.id, oid.to_hex());
        assert!(post.tags.is_empty());
        assert!(post.published);
        assert!(!post.featured);
        assert_eq!(post.read_time, "");
    }
}
