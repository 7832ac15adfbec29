mod resume_repository_mongo;

pub use resume_repository_mongo::ResumeRepositoryMongo;
