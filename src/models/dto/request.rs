use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::ArtifactKind;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStudyMaterialRequest {
    #[validate(length(min = 1, max = 100))]
    pub resource_id: String,

    // "flashcards" | "quiz"; anything else is rejected during deserialization
    #[serde(rename = "type")]
    pub kind: ArtifactKind,

    #[serde(default)]
    pub force_regenerate: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_score_bounds))]
pub struct SubmitQuizScoreRequest {
    #[validate(length(min = 1, max = 100))]
    pub resource_id: String,

    pub score: u32,

    #[validate(range(min = 1, max = 200))]
    pub total_questions: u32,
}

fn validate_score_bounds(request: &SubmitQuizScoreRequest) -> Result<(), ValidationError> {
    if request.score > request.total_questions {
        return Err(ValidationError::new("score_exceeds_total"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}
