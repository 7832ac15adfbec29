pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{blog, contact, resume, statistics, testimonial};

use crate::blog::adapter::outgoing::{BlogPostQueryMongo, BlogPostRepositoryMongo};
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::services::{
    CreateBlogPostService, GetBlogCategoriesService, GetBlogPostService, GetBlogPostsService,
    GetFeaturedBlogPostsService,
};

use crate::contact::adapter::outgoing::ContactRepositoryMongo;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::services::{
    GetContactSubmissionService, ListContactSubmissionsService, SubmitContactService,
};

use crate::resume::adapter::outgoing::ResumeRepositoryMongo;
use crate::resume::application::resume_use_cases::ResumeUseCases;
use crate::resume::application::services::{GetResumeService, UpdateResumeService};

use crate::statistics::adapter::outgoing::StatisticsRepositoryMongo;
use crate::statistics::application::services::{GetStatisticsService, UpdateStatisticsService};
use crate::statistics::application::statistics_use_cases::StatisticsUseCases;

use crate::testimonial::adapter::outgoing::TestimonialRepositoryMongo;
use crate::testimonial::application::services::{
    CreateTestimonialService, GetTestimonialsService,
};
use crate::testimonial::application::testimonial_use_cases::TestimonialUseCases;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::health::DatabaseProbe;
use crate::shared::mongo::MongoProbe;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use mongodb::Database;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub contact: ContactUseCases,
    pub blog: BlogUseCases,
    pub resume: ResumeUseCases,
    pub statistics: StatisticsUseCases,
    pub testimonial: TestimonialUseCases,
}

impl AppState {
    #[cfg(not(tarpaulin_include))]
    fn from_database(db: &Database) -> Self {
        let contact_repo = ContactRepositoryMongo::new(db);
        let blog_repo = BlogPostRepositoryMongo::new(db);
        let blog_query = BlogPostQueryMongo::new(db);
        let resume_repo = ResumeRepositoryMongo::new(db);
        let statistics_repo = StatisticsRepositoryMongo::new(db);
        let testimonial_repo = TestimonialRepositoryMongo::new(db);

        Self {
            contact: ContactUseCases {
                submit: Arc::new(SubmitContactService::new(contact_repo.clone())),
                list: Arc::new(ListContactSubmissionsService::new(contact_repo.clone())),
                get_single: Arc::new(GetContactSubmissionService::new(contact_repo)),
            },
            blog: BlogUseCases {
                create: Arc::new(CreateBlogPostService::new(blog_repo)),
                list: Arc::new(GetBlogPostsService::new(blog_query.clone())),
                featured: Arc::new(GetFeaturedBlogPostsService::new(blog_query.clone())),
                categories: Arc::new(GetBlogCategoriesService::new(blog_query.clone())),
                get_single: Arc::new(GetBlogPostService::new(blog_query)),
            },
            resume: ResumeUseCases {
                get: Arc::new(GetResumeService::new(resume_repo.clone())),
                update: Arc::new(UpdateResumeService::new(resume_repo)),
            },
            statistics: StatisticsUseCases {
                get: Arc::new(GetStatisticsService::new(statistics_repo.clone())),
                update: Arc::new(UpdateStatisticsService::new(statistics_repo)),
            },
            testimonial: TestimonialUseCases {
                create: Arc::new(CreateTestimonialService::new(testimonial_repo.clone())),
                list: Arc::new(GetTestimonialsService::new(testimonial_repo)),
            },
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_env_files();
    let config = AppConfig::from_env().context("invalid configuration")?;

    // Database connection
    let client = shared::mongo::connect(&config.mongo_url)
        .await
        .context("failed to create MongoDB client")?;
    let db = client.database(&config.db_name);

    info!(database = %config.db_name, "Using MongoDB database");

    let state = AppState::from_database(&db);
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    let probe: Arc<dyn DatabaseProbe> = Arc::new(MongoProbe::new(db.clone()));
    let probe = web::Data::from(probe);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(probe.clone())
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await?;

    info!("Server stopped, closing MongoDB client");
    client.shutdown().await;

    Ok(())
}

/// Literal segments (`featured`, `categories`) are registered before the
/// `{post_id}` route so they are not parsed as ids.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // System
    cfg.service(crate::health::root);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contact_submissions_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contact_submission_handler);
    // Blog
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_featured_blog_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_categories_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::create_blog_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_post_handler);
    // Resume
    cfg.service(crate::resume::adapter::incoming::web::routes::get_resume_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::update_resume_handler);
    // Statistics
    cfg.service(crate::statistics::adapter::incoming::web::routes::get_statistics_handler);
    cfg.service(crate::statistics::adapter::incoming::web::routes::update_statistics_handler);
    // Testimonials
    cfg.service(crate::testimonial::adapter::incoming::web::routes::get_testimonials_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::create_testimonial_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
