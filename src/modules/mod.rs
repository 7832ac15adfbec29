pub mod blog;
pub mod contact;
pub mod resume;
pub mod statistics;
pub mod testimonial;
