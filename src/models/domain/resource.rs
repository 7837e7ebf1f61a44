use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded academic document (past question, lecture note, etc.).
/// Owned by the upload flow; this service only ever reads it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub uploaded_by: Option<String>,
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource {
    pub fn new(id: &str, title: &str, file_path: Option<&str>) -> Self {
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            uploaded_by: None,
            file_path: file_path.map(|p| p.to_string()),
            created_at: Some(Utc::now()),
        }
    }
}
