use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::quiz_question::Model as QuizQuestionModel;
use services::{ownership, quiz};
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response, validation_error_response};
use crate::routes::quiz_questions::common::CreateQuizQuestionRequest;

/// POST /quiz-questions
///
/// Adds a question to an owned quiz. Authoring rules are enforced here, once:
/// multiple-choice questions need two or more non-empty options with the
/// correct answer among them, true/false questions need "true" or "false".
pub async fn create_quiz_question(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateQuizQuestionRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    if let Err(err) =
        quiz::validate_question(req.question_type, &req.correct_answer, req.options.as_ref())
    {
        return error_response(err);
    }

    let db = app_state.db();

    let course = match ownership::course_of_quiz(db, req.quiz_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match QuizQuestionModel::create(
        db,
        req.quiz_id,
        &req.question,
        req.question_type,
        &req.correct_answer,
        req.options,
        req.order,
    )
    .await
    {
        Ok(question) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(question, "Quiz question created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
