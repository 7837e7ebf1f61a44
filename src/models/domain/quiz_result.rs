use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One quiz attempt's outcome. Append-only, one row per attempt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub id: String,
    pub user_id: String,
    pub artifact_id: String,
    pub resource_id: String,
    pub score: u32,
    pub total_questions: u32,
    pub submitted_at: DateTime<Utc>,
}

impl QuizResult {
    pub fn new(
        user_id: &str,
        artifact_id: &str,
        resource_id: &str,
        score: u32,
        total_questions: u32,
    ) -> Self {
        QuizResult {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            artifact_id: artifact_id.to_string(),
            resource_id: resource_id.to_string(),
            score,
            total_questions,
            submitted_at: Utc::now(),
        }
    }
}
