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
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::common::UpdateCourseRequest;

/// PUT /courses/{course_id}
///
/// Partial edit of an owned course. Publishing and archiving happen here by
/// setting `status`.
pub async fn edit_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateCourseRequest>,
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

    match CourseModel::edit(
        db,
        course_id,
        req.title.as_deref(),
        req.description.as_deref(),
        req.thumbnail_url.as_deref(),
        req.status,
        req.category.as_deref(),
        req.level.as_deref(),
    )
    .await
    {
        Ok(course) => (
            StatusCode::OK,
            Json(ApiResponse::success(course, "Course updated successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
