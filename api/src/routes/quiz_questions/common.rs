use db::models::quiz_question::QuestionType;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizQuestionRequest {
    pub quiz_id: i64,
    #[validate(length(min = 1, message = "question cannot be empty"))]
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub correct_answer: String,
    /// Option texts for multiple-choice questions.
    pub options: Option<Value>,
    #[serde(default)]
    pub order: i32,
}
