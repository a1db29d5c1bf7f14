use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::assignment::Model as AssignmentModel;
use util::state::AppState;

use crate::response::{ApiResponse, error_response};

/// GET /assignments/lesson/{lesson_id}
pub async fn get_assignments_by_lesson(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> Response {
    match AssignmentModel::get_by_lesson(app_state.db(), lesson_id).await {
        Ok(assignments) => (
            StatusCode::OK,
            Json(ApiResponse::success(assignments, "Assignments retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
