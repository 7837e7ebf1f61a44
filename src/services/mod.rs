pub mod quiz_score_service;
pub mod study_material_service;

pub use quiz_score_service::QuizScoreService;
pub use study_material_service::{GeneratedMaterial, StudyMaterialService};
