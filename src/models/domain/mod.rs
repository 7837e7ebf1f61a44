pub mod quiz_result;
pub mod resource;
pub mod study_artifact;

pub use quiz_result::QuizResult;
pub use resource::Resource;
pub use study_artifact::{ArtifactKind, StudyArtifact};
