use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{doc, serde_helpers::chrono_datetime_as_bson_datetime},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::shared::mongo::STATISTICS;
use crate::statistics::application::{
    domain::entities::Statistics,
    ports::outgoing::{StatisticsRepository, StatisticsRepositoryError},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatisticsDocument {
    years_of_experience: u32,
    teams_led: u32,
    projects_completed: u32,
    companies_worked: u32,
    technologies_used: u32,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    last_updated: DateTime<Utc>,
}

impl From<Statistics> for StatisticsDocument {
    fn from(stats: Statistics) -> Self {
        Self {
            years_of_experience: stats.years_of_experience,
            teams_led: stats.teams_led,
            projects_completed: stats.projects_completed,
            companies_worked: stats.companies_worked,
            technologies_used: stats.technologies_used,
            last_updated: stats.last_updated,
        }
    }
}

impl From<StatisticsDocument> for Statistics {
    fn from(document: StatisticsDocument) -> Self {
        Self {
            years_of_experience: document.years_of_experience,
            teams_led: document.teams_led,
            projects_completed: document.projects_completed,
            companies_worked: document.companies_worked,
            technologies_used: document.technologies_used,
            last_updated: document.last_updated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatisticsRepositoryMongo {
    collection: Collection<StatisticsDocument>,
}

impl StatisticsRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(STATISTICS),
        }
    }
}

fn map_db_err(e: mongodb::error::Error) -> StatisticsRepositoryError {
    StatisticsRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl StatisticsRepository for StatisticsRepositoryMongo {
    async fn find_current(&self) -> Result<Option<Statistics>, StatisticsRepositoryError> {
        let document = self
            .collection
            .find_one(doc! {})
            .await
            .map_err(map_db_err)?;

        Ok(document.map(Statistics::from))
    }

    async fn insert(&self, stats: Statistics) -> Result<Statistics, StatisticsRepositoryError> {
        let document = StatisticsDocument::from(stats);

        self.collection
            .insert_one(&document)
            .await
            .map_err(map_db_err)?;

        Ok(document.into())
    }

    async fn replace(&self, stats: Statistics) -> Result<Statistics, StatisticsRepositoryError> {
        let document = StatisticsDocument::from(stats);

        self.collection
            .replace_one(doc! {}, &document)
            .upsert(true)
            .await
            .map_err(map_db_err)?;

        Ok(document.into())
    }
}
