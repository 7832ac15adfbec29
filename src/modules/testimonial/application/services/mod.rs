mod create_testimonial_service;
mod get_testimonials_service;

pub use create_testimonial_service::CreateTestimonialService;
pub use get_testimonials_service::GetTestimonialsService;
