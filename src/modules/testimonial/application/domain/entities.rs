use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    #[schema(example = "Priya Sharma")]
    pub name: String,
    #[schema(example = "Director of Engineering")]
    pub position: String,
    #[schema(example = "Acme Corp")]
    pub company: String,
    pub content: String,
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: u8,
    /// Image URL, empty when none was given
    pub image: String,
    /// Only approved testimonials are listed by default
    pub approved: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
