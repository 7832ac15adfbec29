use std::time::Duration;

use async_trait::async_trait;
use mongodb::{bson::doc, options::ClientOptions, Client, Database};

use crate::health::DatabaseProbe;

pub const CONTACT_SUBMISSIONS: &str = "contact_submissions";
pub const BLOG_POSTS: &str = "blog_posts";
pub const RESUME: &str = "resume";
pub const STATISTICS: &str = "statistics";
pub const TESTIMONIALS: &str = "testimonials";

/// Upper bound on unpaginated listings.
pub const MAX_LIST_RESULTS: i64 = 1000;

pub async fn connect(mongo_url: &str) -> mongodb::error::Result<Client> {
    let mut options = ClientOptions::parse(mongo_url).await?;
    options.app_name = Some("portfolio_api".to_string());
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));
    options.max_idle_time = Some(Duration::from_secs(300));

    Client::with_options(options)
}

pub async fn ping(db: &Database) -> mongodb::error::Result<()> {
    db.run_command(doc! { "ping": 1 }).await.map(|_| ())
}

/// Readiness probe backed by a `ping` command.
#[derive(Debug, Clone)]
pub struct MongoProbe {
    db: Database,
}

impl MongoProbe {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DatabaseProbe for MongoProbe {
    async fn ping(&self) -> Result<(), String> {
        ping(&self.db).await.map_err(|e| e.to_string())
    }
}
