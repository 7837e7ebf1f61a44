use serde_json::json;

use crate::models::domain::{ArtifactKind, QuizResult, Resource, StudyArtifact};
