use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two kinds of study material the generation pipeline produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Flashcards,
    Quiz,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Flashcards => "flashcards",
            ArtifactKind::Quiz => "quiz",
        }
    }

    /// Keys every element of a generated payload must carry for this kind.
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            ArtifactKind::Flashcards => &["front", "back"],
            ArtifactKind::Quiz => &["question", "options", "correctIndex", "explanation"],
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated flashcard set or quiz, cached per (resource, kind).
/// At most one exists per pair; forced regeneration overwrites in place.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StudyArtifact {
    pub id: String,
    pub resource_id: String,
    pub kind: ArtifactKind,
    pub content: serde_json::Value,
    pub generated_at: DateTime<Utc>,
}

impl StudyArtifact {
    pub fn new(resource_id: &str, kind: ArtifactKind, content: serde_json::Value) -> Self {
        StudyArtifact {
            id: Uuid::new_v4().to_string(),
            resource_id: resource_id.to_string(),
            kind,
            content,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn artifact_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ArtifactKind::Flashcards).unwrap(),
            "\"flashcards\""
        );
        assert_eq!(serde_json::to_string(&ArtifactKind::Quiz).unwrap(), "\"quiz\"");
    }

    #[test]
    fn artifact_kind_rejects_unknown_value() {
        let parsed: Result<ArtifactKind, _> = serde_json::from_str("\"summary\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn new_artifact_gets_id_and_timestamp() {
        let content = json!([{"front": "Define osmosis", "back": "Movement of water"}]);
        let artifact = StudyArtifact::new("res-1", ArtifactKind::Flashcards, content.clone());

        assert!(!artifact.id.is_empty());
        assert_eq!(artifact.resource_id, "res-1");
        assert_eq!(artifact.kind, ArtifactKind::Flashcards);
        assert_eq!(artifact.content, content);
    }

    #[test]
    fn artifact_round_trip_preserves_content() {
        let content = json!([
            {
                "question": "What is 2 + 2?",
                "options": ["3", "4", "5", "6"],
                "correctIndex": 1,
                "explanation": "Basic arithmetic"
            }
        ]);
        let artifact = StudyArtifact::new("res-9", ArtifactKind::Quiz, content);

        let json = serde_json::to_string(&artifact).expect("artifact should serialize");
        let parsed: StudyArtifact = serde_json::from_str(&json).expect("artifact should deserialize");

        assert_eq!(parsed, artifact);
    }
}
