use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, STUDY_ARTIFACTS_COLLECTION},
    errors::AppResult,
    models::domain::{ArtifactKind, StudyArtifact},
};

#[async_trait]
pub trait StudyArtifactRepository: Send + Sync {
    async fn find_by_resource_and_kind(
        &self,
        resource_id: &str,
        kind: ArtifactKind,
    ) -> AppResult<Option<StudyArtifact>>;

    /// Write-through for the generation flow: replaces the row for
    /// (resource_id, kind) or inserts it when absent.
    async fn upsert(&self, artifact: StudyArtifact) -> AppResult<StudyArtifact>;
}

pub struct MongoStudyArtifactRepository {
    collection: Collection<StudyArtifact>,
}

impl MongoStudyArtifactRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(STUDY_ARTIFACTS_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for study_artifacts collection");

        // One artifact per (resource, kind); concurrent first generations
        // lose the race here instead of creating duplicates
        let resource_kind_index = IndexModel::builder()
            .keys(doc! { "resource_id": 1, "kind": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("resource_kind_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(resource_kind_index).await?;

        log::info!("Successfully created indexes for study_artifacts collection");
        Ok(())
    }
}

#[async_trait]
impl StudyArtifactRepository for MongoStudyArtifactRepository {
    async fn find_by_resource_and_kind(
        &self,
        resource_id: &str,
        kind: ArtifactKind,
    ) -> AppResult<Option<StudyArtifact>> {
        let artifact = self
            .collection
            .find_one(doc! { "resource_id": resource_id, "kind": kind.as_str() })
            .await?;
        Ok(artifact)
    }

    async fn upsert(&self, artifact: StudyArtifact) -> AppResult<StudyArtifact> {
        self.collection
            .replace_one(
                doc! {
                    "resource_id": &artifact.resource_id,
                    "kind": artifact.kind.as_str()
                },
                &artifact,
            )
            .upsert(true)
            .await?;
        Ok(artifact)
    }
}
