pub mod study_handler;

pub use study_handler::{
    generate_study_material, health_check, list_quiz_scores, submit_quiz_score,
};
