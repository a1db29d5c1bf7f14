use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lesson::Model as LessonModel;
use services::ownership;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, Empty, error_response};

/// DELETE /lessons/{lesson_id}
///
/// Removes a lesson. Enrollment percentages derived from the old lesson set
/// are repaired by the owner via the course recalculation endpoint.
pub async fn delete_lesson(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let db = app_state.db();

    let course = match ownership::course_of_lesson(db, lesson_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match LessonModel::delete(db, lesson_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Lesson deleted successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
