use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::quiz;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::quiz_attempts::common::SubmitAttemptRequest;

/// POST /quiz-attempts
///
/// Grades the submitted answers against the stored question bank and appends
/// an immutable attempt carrying score, pass/fail, and the raw answers.
pub async fn submit_quiz_attempt(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<SubmitAttemptRequest>,
) -> Response {
    match quiz::submit_attempt(app_state.db(), &claims.sub, req.quiz_id, &req.answers).await {
        Ok(attempt) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(attempt, "Quiz attempt recorded successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
