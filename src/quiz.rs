use crate::error::PlannerError;
use crate::generation::{generate_typed, GenerationRequest, RequestKind, StructuredGenerator};
use crate::types::{Quiz, SemesterInfo};
use tracing::info;

/// Major topics appended to the quiz payload.
pub const QUIZ_TOPICS: usize = 10;

pub const QUIZ_SYSTEM_PROMPT: &str = "Generate practice questions based on the course syllabus.

Guidelines:
- Focus on key concepts and learning outcomes
- Mix question types (conceptual, application-based)
- Generate 5-10 questions
- Make questions clear and specific
- Cover different difficulty levels";

pub fn quiz_payload(syllabus: &str, info: Option<&SemesterInfo>) -> String {
    match info {
        Some(info) if !info.major_topics.is_empty() => {
            let topics = info
                .major_topics
                .iter()
                .take(QUIZ_TOPICS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{syllabus}\n\nKey topics: {topics}")
        }
        _ => syllabus.to_string(),
    }
}

/// One call; independent of calendar generation.
pub async fn generate_quiz(
    generator: &dyn StructuredGenerator,
    syllabus: &str,
    info: Option<&SemesterInfo>,
) -> Result<Quiz, PlannerError> {
    if syllabus.trim().is_empty() {
        return Err(PlannerError::InvalidInput(
            "Syllabus text cannot be empty".to_string(),
        ));
    }
    let request = GenerationRequest::for_schema::<Quiz>(
        RequestKind::Quiz,
        QUIZ_SYSTEM_PROMPT,
        quiz_payload(syllabus, info),
    );
    let quiz: Quiz = generate_typed(generator, &request).await?;
    info!(topic = %quiz.topic, questions = quiz.questions.len(), "Quiz generated");
    Ok(quiz)
}
