use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ArtifactKind, QuizResult},
    repositories::{QuizResultRepository, StudyArtifactRepository},
};

pub struct QuizScoreService {
    artifacts: Arc<dyn StudyArtifactRepository>,
    results: Arc<dyn QuizResultRepository>,
}

impl QuizScoreService {
    pub fn new(
        artifacts: Arc<dyn StudyArtifactRepository>,
        results: Arc<dyn QuizResultRepository>,
    ) -> Self {
        Self { artifacts, results }
    }

    /// Record one quiz attempt. Fails with 404 until a quiz artifact has
    /// been generated for the resource; rows are append-only, one per
    /// attempt. Point awarding and leaderboard ranking happen elsewhere.
    pub async fn submit_score(
        &self,
        user_id: &str,
        resource_id: &str,
        score: u32,
        total_questions: u32,
    ) -> AppResult<QuizResult> {
        if total_questions == 0 {
            return Err(AppError::ValidationError(
                "totalQuestions must be greater than zero".to_string(),
            ));
        }
        if score > total_questions {
            return Err(AppError::ValidationError(
                "score cannot exceed totalQuestions".to_string(),
            ));
        }

        let quiz = self
            .artifacts
            .find_by_resource_and_kind(resource_id, ArtifactKind::Quiz)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz for resource '{}' not found", resource_id))
            })?;

        let result = QuizResult::new(user_id, &quiz.id, resource_id, score, total_questions);
        let created = self.results.create(result).await?;

        log::info!(
            "recorded quiz score {}/{} for user {} on resource {}",
            created.score,
            created.total_questions,
            user_id,
            resource_id
        );

        Ok(created)
    }

    pub async fn list_user_results(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<QuizResult>, i64)> {
        self.results.list_by_user(user_id, offset, limit).await
    }
}
