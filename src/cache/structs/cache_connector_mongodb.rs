use mongodb::bson::Document;
use mongodb::{Collection, Database};

#[derive(Debug, Clone)]
pub struct CacheConnectorMongoDb {
    pub(crate) database: Database,
    pub(crate) collection: Collection<Document>,
}
