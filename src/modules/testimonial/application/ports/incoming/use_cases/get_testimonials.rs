use async_trait::async_trait;

use crate::testimonial::application::{
    domain::entities::Testimonial, ports::outgoing::TestimonialFilter,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTestimonialsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTestimonialsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: TestimonialFilter,
    ) -> Result<Vec<Testimonial>, GetTestimonialsError>;
}
