use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::health::{HealthResponse, ReadinessResponse, RootResponse};
use crate::shared::validation::FieldError;

// Blog
use crate::blog::adapter::incoming::web::routes::CreateBlogPostRequest;
use crate::blog::application::domain::entities::{BlogCategories, BlogPost};

// Contact
use crate::contact::adapter::incoming::web::routes::SubmitContactRequest;
use crate::contact::application::domain::entities::ContactSubmission;

// Resume
use crate::resume::adapter::incoming::web::routes::UpdateResumeRequest;
use crate::resume::application::domain::entities::{Education, PersonalInfo, Resume};

// Statistics
use crate::statistics::adapter::incoming::web::routes::UpdateStatisticsRequest;
use crate::statistics::application::domain::entities::Statistics;

// Testimonials
use crate::testimonial::adapter::incoming::web::routes::CreateTestimonialRequest;
use crate::testimonial::application::domain::entities::Testimonial;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content API behind the portfolio site: contact form, blog, resume, statistics and testimonials",
    ),
    paths(
        // System
        crate::health::root,
        crate::health::health,
        crate::health::readiness,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::contact::adapter::incoming::web::routes::get_contact_submissions_handler,
        crate::contact::adapter::incoming::web::routes::get_contact_submission_handler,

        // Blog endpoints
        crate::blog::adapter::incoming::web::routes::get_blog_posts_handler,
        crate::blog::adapter::incoming::web::routes::get_featured_blog_posts_handler,
        crate::blog::adapter::incoming::web::routes::get_blog_categories_handler,
        crate::blog::adapter::incoming::web::routes::create_blog_post_handler,
        crate::blog::adapter::incoming::web::routes::get_blog_post_handler,

        // Resume endpoints
        crate::resume::adapter::incoming::web::routes::get_resume_handler,
        crate::resume::adapter::incoming::web::routes::update_resume_handler,

        // Statistics endpoints
        crate::statistics::adapter::incoming::web::routes::get_statistics_handler,
        crate::statistics::adapter::incoming::web::routes::update_statistics_handler,

        // Testimonial endpoints
        crate::testimonial::adapter::incoming::web::routes::get_testimonials_handler,
        crate::testimonial::adapter::incoming::web::routes::create_testimonial_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FieldError,
            RootResponse,
            HealthResponse,
            ReadinessResponse,

            // Contact
            SubmitContactRequest,
            ContactSubmission,

            // Blog
            CreateBlogPostRequest,
            BlogPost,
            BlogCategories,

            // Resume
            UpdateResumeRequest,
            Resume,
            PersonalInfo,
            Education,

            // Statistics
            UpdateStatisticsRequest,
            Statistics,

            // Testimonials
            CreateTestimonialRequest,
            Testimonial
        )
    ),
    tags(
        (name = "system", description = "Liveness, readiness and version"),
        (name = "contact", description = "Contact form submissions"),
        (name = "blog", description = "Blog posts"),
        (name = "resume", description = "Resume singleton"),
        (name = "statistics", description = "Landing page statistics singleton"),
        (name = "testimonials", description = "Visitor testimonials"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/",
            "/api/health",
            "/api/ready",
            "/api/contact",
            "/api/contact/{submission_id}",
            "/api/blog-posts",
            "/api/blog-posts/featured",
            "/api/blog-posts/categories",
            "/api/blog-posts/{post_id}",
            "/api/resume",
            "/api/statistics",
            "/api/testimonials",
        ] {
            assert!(paths.contains(&expected), "{expected} missing from OpenAPI");
        }
    }

    #[test]
    fn schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        for name in ["BlogPost", "Resume", "Statistics", "Testimonial", "ErrorResponse"] {
            assert!(components.schemas.contains_key(name), "{name} missing");
        }
    }
}
