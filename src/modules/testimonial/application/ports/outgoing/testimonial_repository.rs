use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::testimonial::application::domain::entities::Testimonial;

#[derive(Debug, Clone, PartialEq)]
pub struct NewTestimonial {
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
    pub image: String,
    pub approved: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `None` leaves the flag unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestimonialFilter {
    pub approved: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TestimonialRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn insert(&self, data: NewTestimonial)
        -> Result<Testimonial, TestimonialRepositoryError>;

    /// Newest `createdAt` first, at most `limit` entries.
    async fn list(
        &self,
        filter: TestimonialFilter,
        limit: i64,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError>;
}
