use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::QuizResult;

#[derive(Debug, Clone, Serialize)]
pub struct GenerateStudyMaterialResponse {
    pub cached: bool,
    pub content: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultResponse {
    pub id: String,
    pub resource_id: String,
    pub score: u32,
    pub total_questions: u32,
    pub submitted_at: DateTime<Utc>,
}

impl From<QuizResult> for QuizResultResponse {
    fn from(result: QuizResult) -> Self {
        QuizResultResponse {
            id: result.id,
            resource_id: result.resource_id,
            score: result.score,
            total_questions: result.total_questions,
            submitted_at: result.submitted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResultListResponse {
    pub items: Vec<QuizResultResponse>,
    pub total: i64,
}
