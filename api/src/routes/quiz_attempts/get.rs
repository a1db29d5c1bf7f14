use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::quiz_attempt::Model as QuizAttemptModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};

/// GET /quiz-attempts/quiz/{quiz_id}
///
/// The caller's attempt history for one quiz, newest first.
pub async fn get_my_attempts(
    State(app_state): State<AppState>,
    Path(quiz_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match QuizAttemptModel::get_by_user_and_quiz(app_state.db(), &claims.sub, quiz_id).await {
        Ok(attempts) => (
            StatusCode::OK,
            Json(ApiResponse::success(attempts, "Quiz attempts retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
