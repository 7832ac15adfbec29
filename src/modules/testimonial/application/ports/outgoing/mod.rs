mod testimonial_repository;

pub use testimonial_repository::{
    NewTestimonial, TestimonialFilter, TestimonialRepository, TestimonialRepositoryError,
};
