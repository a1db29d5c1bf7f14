use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::progress;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::lesson_progress::common::RecordCompletionRequest;

/// POST /lesson-progress
///
/// Marks a lesson complete for the caller and refreshes the cached percentage
/// on their enrollment in the lesson's course. The completion fact is recorded
/// even when the caller turns out not to be enrolled.
pub async fn record_lesson_completion(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<RecordCompletionRequest>,
) -> Response {
    match progress::record_lesson_completion(app_state.db(), &claims.sub, req.lesson_id).await {
        Ok(progress) => (
            StatusCode::OK,
            Json(ApiResponse::success(progress, "Lesson progress recorded successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
