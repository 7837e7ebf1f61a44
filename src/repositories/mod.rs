pub mod quiz_result_repository;
pub mod resource_repository;
pub mod study_artifact_repository;

pub use quiz_result_repository::{MongoQuizResultRepository, QuizResultRepository};
pub use resource_repository::{MongoResourceRepository, ResourceRepository};
pub use study_artifact_repository::{MongoStudyArtifactRepository, StudyArtifactRepository};
