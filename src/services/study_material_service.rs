use std::sync::Arc;

use crate::{
    constants::prompts::build_prompt,
    errors::{AppError, AppResult},
    extract::{self, ExtractionLimits},
    genai::{parser::parse_generated_payload, GenerationClient},
    models::domain::{ArtifactKind, StudyArtifact},
    repositories::{ResourceRepository, StudyArtifactRepository},
    storage::ObjectStorage,
};

#[derive(Debug, Clone)]
pub struct GeneratedMaterial {
    pub cached: bool,
    pub content: serde_json::Value,
}

/// The cache-or-generate flow. Serves the stored artifact when one exists;
/// otherwise downloads the file, extracts its text, prompts the model,
/// validates the output, and writes the result through before returning it.
pub struct StudyMaterialService {
    resources: Arc<dyn ResourceRepository>,
    artifacts: Arc<dyn StudyArtifactRepository>,
    storage: Arc<dyn ObjectStorage>,
    generator: Option<Arc<dyn GenerationClient>>,
    limits: ExtractionLimits,
}

impl StudyMaterialService {
    pub fn new(
        resources: Arc<dyn ResourceRepository>,
        artifacts: Arc<dyn StudyArtifactRepository>,
        storage: Arc<dyn ObjectStorage>,
        generator: Option<Arc<dyn GenerationClient>>,
        limits: ExtractionLimits,
    ) -> Self {
        Self {
            resources,
            artifacts,
            storage,
            generator,
            limits,
        }
    }

    pub async fn generate(
        &self,
        resource_id: &str,
        kind: ArtifactKind,
        force_regenerate: bool,
    ) -> AppResult<GeneratedMaterial> {
        let generator = self.generator.as_ref().ok_or_else(|| {
            AppError::NotConfigured("generation backend is not configured".to_string())
        })?;

        if !force_regenerate {
            if let Some(artifact) = self
                .artifacts
                .find_by_resource_and_kind(resource_id, kind)
                .await?
            {
                log::info!("serving cached {} for resource {}", kind, resource_id);
                return Ok(GeneratedMaterial {
                    cached: true,
                    content: artifact.content,
                });
            }
        }

        let resource = self.resources.find_by_id(resource_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Resource with id '{}' not found", resource_id))
        })?;

        let file_path = resource
            .file_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Resource '{}' has no attached file",
                    resource_id
                ))
            })?;

        let bytes = self.storage.download(file_path).await?;
        let text = extract::extract_text(&bytes, file_path)?;
        let text = self.limits.apply(&text)?;

        let prompt = build_prompt(kind, &text);
        let completion = generator.complete(&prompt).await?;
        let content = parse_generated_payload(kind, &completion)?;

        let artifact = StudyArtifact::new(resource_id, kind, content.clone());
        if let Err(err) = self.artifacts.upsert(artifact).await {
            // The freshly generated content is still served; the next
            // uncached request simply regenerates
            log::warn!(
                "failed to cache generated {} for resource {}: {}",
                kind,
                resource_id,
                err
            );
        }

        Ok(GeneratedMaterial {
            cached: false,
            content,
        })
    }
}
