mod contact_repository_mongo;

pub use contact_repository_mongo::ContactRepositoryMongo;
