use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::quiz::Model as QuizModel;
use services::ownership;
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response, validation_error_response};
use crate::routes::quizzes::common::CreateQuizRequest;

/// POST /quizzes
///
/// Attaches a quiz to a lesson whose course the acting instructor owns.
pub async fn create_quiz(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateQuizRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let db = app_state.db();

    let course = match ownership::course_of_lesson(db, req.lesson_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match QuizModel::create(db, req.lesson_id, &req.title, req.pass_percentage).await {
        Ok(quiz) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(quiz, "Quiz created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
