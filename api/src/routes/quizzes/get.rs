use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{quiz::Model as QuizModel, quiz_question::Model as QuizQuestionModel};
use util::state::AppState;

use crate::response::{ApiResponse, error_response};

/// GET /quizzes/{quiz_id}/questions
///
/// The quiz's question bank in authoring order. Correct answers ride along;
/// grading happens server-side regardless of what the client sees.
pub async fn get_quiz_questions(
    State(app_state): State<AppState>,
    Path(quiz_id): Path<i64>,
) -> Response {
    match QuizQuestionModel::get_by_quiz(app_state.db(), quiz_id).await {
        Ok(questions) => (
            StatusCode::OK,
            Json(ApiResponse::success(questions, "Quiz questions retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}

/// GET /quizzes/lesson/{lesson_id}
pub async fn get_quizzes_by_lesson(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> Response {
    match QuizModel::get_by_lesson(app_state.db(), lesson_id).await {
        Ok(quizzes) => (
            StatusCode::OK,
            Json(ApiResponse::success(quizzes, "Quizzes retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
