use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::module::Model as ModuleModel;
use util::state::AppState;

use crate::response::{ApiResponse, error_response};

/// GET /modules/course/{course_id}
///
/// The course's modules in authoring order.
pub async fn get_modules_by_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Response {
    match ModuleModel::get_by_course(app_state.db(), course_id).await {
        Ok(modules) => (
            StatusCode::OK,
            Json(ApiResponse::success(modules, "Modules retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
