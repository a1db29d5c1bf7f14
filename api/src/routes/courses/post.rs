use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use services::{ServiceError, ownership, progress};
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, Empty, error_response, validation_error_response};
use crate::routes::courses::common::CreateCourseRequest;

/// POST /courses
///
/// Creates a new draft course owned by the acting instructor.
pub async fn create_course(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateCourseRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    match CourseModel::create(
        app_state.db(),
        &claims.sub,
        &req.title,
        req.description.as_deref(),
        req.thumbnail_url.as_deref(),
        req.category.as_deref(),
        req.level.as_deref(),
    )
    .await
    {
        Ok(course) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(course, "Course created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}

/// POST /courses/{course_id}/recalculate-progress
///
/// Owner-triggered repair: rederives every enrollment's cached percentage from
/// the course's current lesson set. Safe to run any number of times.
pub async fn recalculate_progress(
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

    match progress::recalculate_course_progress(db, course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty,
                "Course progress recalculated successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
