use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{Database, RESOURCES_COLLECTION},
    errors::AppResult,
    models::domain::Resource,
};

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Resource>>;
}

pub struct MongoResourceRepository {
    collection: Collection<Resource>,
}

impl MongoResourceRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(RESOURCES_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl ResourceRepository for MongoResourceRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Resource>> {
        let resource = self.collection.find_one(doc! { "id": id }).await?;
        Ok(resource)
    }
}
