use crate::models::domain::ArtifactKind;

pub const FLASHCARD_COUNT: usize = 15;
pub const QUIZ_QUESTION_COUNT: usize = 10;

/// Build the instruction prompt for a kind from already-truncated document text.
///
/// Both templates demand a bare JSON array with no prose and no markdown.
/// That is a contract with the model, not a guarantee — the output parser
/// exists because the contract is sometimes violated.
pub fn build_prompt(kind: ArtifactKind, text: &str) -> String {
    match kind {
        ArtifactKind::Flashcards => build_flashcard_prompt(text),
        ArtifactKind::Quiz => build_quiz_prompt(text),
    }
}

fn build_flashcard_prompt(text: &str) -> String {
    format!(
        "You are a study assistant for university students. Based on the following course \
material, generate exactly {FLASHCARD_COUNT} flashcards covering its most important concepts, \
definitions, and facts.

Respond with ONLY a JSON array, no markdown, no code fences, no commentary. Each element must \
have this shape:
{{\"front\": \"the question or term\", \"back\": \"the answer or definition\"}}

Keep each front under 200 characters and each back under 500 characters.

Course material:
{text}"
    )
}

fn build_quiz_prompt(text: &str) -> String {
    format!(
        "You are a study assistant for university students. Based on the following course \
material, generate a multiple-choice quiz of exactly {QUIZ_QUESTION_COUNT} questions testing \
understanding of its key points.

Respond with ONLY a JSON array, no markdown, no code fences, no commentary. Each element must \
have this shape:
{{\"question\": \"...\", \"options\": [\"A\", \"B\", \"C\", \"D\"], \"correctIndex\": 0, \
\"explanation\": \"why the correct option is right\"}}

Every question must have exactly 4 options, and correctIndex must be the zero-based index of \
the correct option.

Course material:
{text}"
    )
}
