use std::sync::Arc;

use crate::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialUseCase, GetTestimonialsUseCase,
};

#[derive(Clone)]
pub struct TestimonialUseCases {
    pub create: Arc<dyn CreateTestimonialUseCase + Send + Sync>,
    pub list: Arc<dyn GetTestimonialsUseCase + Send + Sync>,
}
