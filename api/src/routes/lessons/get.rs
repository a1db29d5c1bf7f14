use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lesson::Model as LessonModel;
use util::state::AppState;

use crate::response::{ApiResponse, error_response};

/// GET /lessons/module/{module_id}
///
/// The module's lessons in authoring order.
pub async fn get_lessons_by_module(
    State(app_state): State<AppState>,
    Path(module_id): Path<i64>,
) -> Response {
    match LessonModel::get_by_module(app_state.db(), module_id).await {
        Ok(lessons) => (
            StatusCode::OK,
            Json(ApiResponse::success(lessons, "Lessons retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
