use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[schema(example = "665f1c2e9b1e8a3d4c2b1a00")]
    pub id: String,
    #[schema(example = "Building Scalable AI Systems")]
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: DateTime<Utc>,
    #[schema(example = "8 min read")]
    pub read_time: String,
    #[schema(example = "AI & Machine Learning")]
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Distinct categories of published posts
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogCategories {
    pub categories: Vec<String>,
}
