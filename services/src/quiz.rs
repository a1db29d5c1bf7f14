//! Quiz engine: grades a submitted answer set against the stored question bank
//! and decides pass/fail.

use std::collections::HashMap;

use db::models::{
    quiz::Model as QuizModel,
    quiz_attempt::Model as QuizAttemptModel,
    quiz_question::{Model as QuizQuestionModel, QuestionType},
};
use sea_orm::DbConn;
use serde_json::Value;

use crate::error::ServiceError;
use crate::progress::percentage;

/// Scores a submission and stores it as a new, immutable attempt.
///
/// Answers are matched per question by exact, case-sensitive string equality.
/// Unanswered questions count as incorrect; answers keyed by a question id not
/// belonging to the quiz count toward nothing. A quiz with no questions cannot
/// be graded and is rejected before any write.
pub async fn submit_attempt(
    db: &DbConn,
    user_id: &str,
    quiz_id: i64,
    answers: &HashMap<String, String>,
) -> Result<QuizAttemptModel, ServiceError> {
    let quiz = QuizModel::get_by_id(db, quiz_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Quiz not found".into()))?;

    let questions = QuizQuestionModel::get_by_quiz(db, quiz_id).await?;
    if questions.is_empty() {
        return Err(ServiceError::Validation(
            "Quiz has no questions to grade".into(),
        ));
    }

    let correct = questions
        .iter()
        .filter(|q| {
            answers
                .get(&q.id.to_string())
                .is_some_and(|a| *a == q.correct_answer)
        })
        .count();

    let score = percentage(correct, questions.len());
    let passed = score >= quiz.pass_percentage;

    let raw_answers = serde_json::to_value(answers)
        .map_err(|e| ServiceError::Validation(format!("Unserializable answers: {e}")))?;

    let attempt =
        QuizAttemptModel::create(db, user_id, quiz_id, raw_answers, score, passed).await?;
    Ok(attempt)
}

/// Creation-time authoring checks for a question.
///
/// Scoring never revalidates; a question that passes here is gradable as-is.
pub fn validate_question(
    question_type: QuestionType,
    correct_answer: &str,
    options: Option<&Value>,
) -> Result<(), ServiceError> {
    match question_type {
        QuestionType::MultipleChoice => {
            let options = options
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    ServiceError::Validation(
                        "Multiple-choice questions require an options array".into(),
                    )
                })?;

            let texts: Vec<&str> = options
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .collect();

            if texts.len() < 2 || texts.len() != options.len() {
                return Err(ServiceError::Validation(
                    "Multiple-choice questions require at least two non-empty options".into(),
                ));
            }

            if !texts.contains(&correct_answer) {
                return Err(ServiceError::Validation(
                    "The correct answer must be one of the options".into(),
                ));
            }
        }
        QuestionType::TrueFalse => {
            if correct_answer != "true" && correct_answer != "false" {
                return Err(ServiceError::Validation(
                    "True/false questions must have \"true\" or \"false\" as the correct answer"
                        .into(),
                ));
            }
        }
    }

    Ok(())
}
