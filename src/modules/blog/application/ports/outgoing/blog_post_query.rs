// src/modules/blog/application/ports/outgoing/blog_post_query.rs

use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;
use crate::shared::document_id::DocumentId;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Every `Some` field narrows the result; `None` leaves that field unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostFilter {
    /// Exact match
    pub category: Option<String>,
    /// Case-insensitive substring over title, excerpt, content and tags
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

impl BlogPostFilter {
    pub fn featured_and_published() -> Self {
        Self {
            featured: Some(true),
            published: Some(true),
            ..Default::default()
        }
    }
}

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Offset pagination over the date-descending result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: u64,
    limit: i64,
}

impl PageRequest {
    /// `limit` is clamped to `1..=MAX_PAGE_LIMIT`.
    pub fn new(limit: Option<i64>, skip: Option<u64>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            limit: limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, MAX_PAGE_LIMIT),
        }
    }

    pub fn first(limit: i64) -> Self {
        Self::new(Some(limit), None)
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogPostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BlogPostQuery: Send + Sync {
    /// Newest `date` first
    async fn list(
        &self,
        filter: BlogPostFilter,
        page: PageRequest,
    ) -> Result<Vec<BlogPost>, BlogPostQueryError>;

    async fn published_categories(&self) -> Result<Vec<String>, BlogPostQueryError>;

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<BlogPost>, BlogPostQueryError>;
}
