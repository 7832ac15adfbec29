mod create_testimonial;
mod get_testimonials;

pub use create_testimonial::*;
pub use get_testimonials::*;
