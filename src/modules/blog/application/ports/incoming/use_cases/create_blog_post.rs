use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;
use crate::shared::validation::{ValidationErrors, Validator};

//
// ──────────────────────────────────────────────────────────
// Create Blog Post Command
// ──────────────────────────────────────────────────────────
//

/// Author-supplied fields of a post before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
}

#[derive(Debug, Clone)]
pub struct CreateBlogPostCommand {
    draft: BlogPostDraft,
}

impl CreateBlogPostCommand {
    pub fn new(draft: BlogPostDraft) -> Result<Self, ValidationErrors> {
        Validator::new()
            .length("title", &draft.title, 1, Some(200))
            .length("excerpt", &draft.excerpt, 1, Some(500))
            .length("content", &draft.content, 1, None)
            .length("readTime", &draft.read_time, 0, Some(50))
            .length("category", &draft.category, 0, Some(100))
            .finish()?;

        Ok(Self { draft })
    }

    pub fn draft(&self) -> &BlogPostDraft {
        &self.draft
    }

    pub fn into_draft(self) -> BlogPostDraft {
        self.draft
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBlogPostError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateBlogPostUseCase: Send + Sync {
    async fn execute(&self, command: CreateBlogPostCommand)
        -> Result<BlogPost, CreateBlogPostError>;
}
