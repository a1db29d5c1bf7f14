use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use services::{ServiceError, ownership};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, Empty, error_response};

/// DELETE /courses/{course_id}
///
/// Removes an owned course; modules, lessons, enrollments, and the rest of the
/// subtree go with it via FK cascades.
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let db = app_state.db();

    let course = match CourseModel::get_by_id(db, course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => return error_response(ServiceError::NotFound("Course not found".into())),
        Err(err) => return error_response(err.into()),
    };

    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match CourseModel::delete(db, course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Course deleted successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
