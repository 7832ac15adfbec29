use async_trait::async_trait;

use crate::shared::validation::{ValidationErrors, Validator};
use crate::testimonial::application::domain::entities::Testimonial;

//
// ──────────────────────────────────────────────────────────
// Create Testimonial Command
// ──────────────────────────────────────────────────────────
//

/// A visitor-submitted testimonial. Moderation flags are not part of it,
/// new testimonials always start unapproved and unfeatured.
#[derive(Debug, Clone)]
pub struct CreateTestimonialCommand {
    name: String,
    position: String,
    company: String,
    content: String,
    rating: u8,
    image: String,
}

impl CreateTestimonialCommand {
    pub fn new(
        name: String,
        position: String,
        company: String,
        content: String,
        rating: i64,
        image: String,
    ) -> Result<Self, ValidationErrors> {
        Validator::new()
            .length("name", &name, 1, Some(100))
            .length("position", &position, 1, Some(100))
            .length("company", &company, 1, Some(100))
            .length("content", &content, 1, Some(1000))
            .range("rating", rating, 1, 5)
            .finish()?;

        // range-checked above
        let rating = u8::try_from(rating).unwrap_or(1);

        Ok(Self {
            name,
            position,
            company,
            content,
            rating,
            image,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTestimonialError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTestimonialUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateTestimonialCommand,
    ) -> Result<Testimonial, CreateTestimonialError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(rating: i64) -> Result<CreateTestimonialCommand, ValidationErrors> {
        CreateTestimonialCommand::new(
            "Priya".into(),
            "CTO".into(),
            "Acme".into(),
            "Great leader".into(),
            rating,
            String::new(),
        )
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert_eq!(command(1).unwrap().rating(), 1);
        assert_eq!(command(5).unwrap().rating(), 5);
        assert!(command(0).unwrap_err().has_field("rating"));
        assert!(command(6).unwrap_err().has_field("rating"));
        assert!(command(-2).unwrap_err().has_field("rating"));
    }

    #[test]
    fn text_lengths_are_enforced() {
        let errors = CreateTestimonialCommand::new(
            "".into(),
            "p".repeat(101),
            "Acme".into(),
            "c".repeat(1001),
            4,
            String::new(),
        )
        .unwrap_err();

        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "position", "content"]);
    }

    #[test]
    fn image_is_optional() {
        let cmd = command(4).unwrap();
        assert_eq!(cmd.image(), "");
        assert_eq!(cmd.company(), "Acme");
    }
}
