mod testimonial_repository_mongo;

pub use testimonial_repository_mongo::TestimonialRepositoryMongo;
