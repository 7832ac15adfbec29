mod statistics_repository_mongo;

pub use statistics_repository_mongo::StatisticsRepositoryMongo;
