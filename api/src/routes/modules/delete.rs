use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::module::Model as ModuleModel;
use services::ownership;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, Empty, error_response};

/// DELETE /modules/{module_id}
///
/// Removes a module and, via cascade, its lessons. Cached enrollment
/// percentages go stale here until the owner runs the course recalculation.
pub async fn delete_module(
    State(app_state): State<AppState>,
    Path(module_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let db = app_state.db();

    let course = match ownership::course_of_module(db, module_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match ModuleModel::delete(db, module_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Module deleted successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
