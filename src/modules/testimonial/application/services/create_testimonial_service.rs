use async_trait::async_trait;

use crate::shared::time::now_utc;
use crate::testimonial::application::{
    domain::entities::Testimonial,
    ports::{
        incoming::use_cases::{
            CreateTestimonialCommand, CreateTestimonialError, CreateTestimonialUseCase,
        },
        outgoing::{NewTestimonial, TestimonialRepository},
    },
};

#[derive(Debug, Clone)]
pub struct CreateTestimonialService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTestimonialService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTestimonialUseCase for CreateTestimonialService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateTestimonialCommand,
    ) -> Result<Testimonial, CreateTestimonialError> {
        let now = now_utc();

        let data = NewTestimonial {
            name: command.name().to_string(),
            position: command.position().to_string(),
            company: command.company().to_string(),
            content: command.content().to_string(),
            rating: command.rating(),
            image: command.image().to_string(),
            approved: false,
            featured: false,
            created_at: now,
            updated_at: now,
        };

        self.repository
            .insert(data)
            .await
            .map_err(|e| CreateTestimonialError::RepositoryError(e.to_string()))
    }
}
