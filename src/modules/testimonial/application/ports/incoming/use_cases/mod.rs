mod create_testimonial;
mod get_testimonials;

pub use create_testimonial::{
    CreateTestimonialCommand, CreateTestimonialError, CreateTestimonialUseCase,
};
pub use get_testimonials::{GetTestimonialsError, GetTestimonialsUseCase};
