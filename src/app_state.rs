use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    extract::ExtractionLimits,
    genai::{ChatCompletionClient, GenerationClient},
    repositories::{MongoQuizResultRepository, MongoResourceRepository, MongoStudyArtifactRepository},
    services::{QuizScoreService, StudyMaterialService},
    storage::HttpObjectStorage,
};

#[derive(Clone)]
pub struct AppState {
    pub study_material_service: Arc<StudyMaterialService>,
    pub quiz_score_service: Arc<QuizScoreService>,
    pub jwt_service: JwtService,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config, db: &Database) -> AppResult<Self> {
        let resource_repository = Arc::new(MongoResourceRepository::new(db));

        let artifact_repository = Arc::new(MongoStudyArtifactRepository::new(db));
        artifact_repository.ensure_indexes().await?;

        let result_repository = Arc::new(MongoQuizResultRepository::new(db));
        result_repository.ensure_indexes().await?;

        let storage = Arc::new(HttpObjectStorage::new(
            &config.storage_base_url,
            config.storage_service_key.clone(),
        )?);

        // No API key means generation requests answer 503 until one is set
        let generator: Option<Arc<dyn GenerationClient>> = match &config.model_api_key {
            Some(api_key) => Some(Arc::new(ChatCompletionClient::new(
                &config.model_api_base,
                api_key.clone(),
                &config.model_name,
                config.model_temperature,
                config.model_timeout_secs,
            )?)),
            None => None,
        };

        let limits = ExtractionLimits {
            min_chars: config.min_extract_chars,
            max_chars: config.max_prompt_chars,
        };

        let study_material_service = Arc::new(StudyMaterialService::new(
            resource_repository,
            artifact_repository.clone(),
            storage,
            generator,
            limits,
        ));

        let quiz_score_service = Arc::new(QuizScoreService::new(
            artifact_repository,
            result_repository,
        ));

        let jwt_service = JwtService::new(&config.jwt_secret, 24);

        Ok(Self {
            study_material_service,
            quiz_score_service,
            jwt_service,
            config: Arc::new(config),
        })
    }
}
