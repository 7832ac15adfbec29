use async_trait::async_trait;

use crate::shared::mongo::MAX_LIST_RESULTS;
use crate::testimonial::application::{
    domain::entities::Testimonial,
    ports::{
        incoming::use_cases::{GetTestimonialsError, GetTestimonialsUseCase},
        outgoing::{TestimonialFilter, TestimonialRepository},
    },
};

#[derive(Debug, Clone)]
pub struct GetTestimonialsService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetTestimonialsService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetTestimonialsUseCase for GetTestimonialsService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    async fn execute(
        &self,
        filter: TestimonialFilter,
    ) -> Result<Vec<Testimonial>, GetTestimonialsError> {
        self.repository
            .list(filter, MAX_LIST_RESULTS)
            .await
            .map_err(|e| GetTestimonialsError::RepositoryError(e.to_string()))
    }
}
