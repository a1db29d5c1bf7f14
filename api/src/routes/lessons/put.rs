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
use crate::response::{ApiResponse, error_response};
use crate::routes::lessons::common::{SetVideoRequest, UpdateLessonRequest};

/// PUT /lessons/{lesson_id}
pub async fn edit_lesson(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateLessonRequest>,
) -> Response {
    let db = app_state.db();

    let course = match ownership::course_of_lesson(db, lesson_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match LessonModel::edit(
        db,
        lesson_id,
        req.title.as_deref(),
        req.description.as_deref(),
        req.duration,
        req.order,
    )
    .await
    {
        Ok(lesson) => (
            StatusCode::OK,
            Json(ApiResponse::success(lesson, "Lesson updated successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}

/// PUT /lessons/{lesson_id}/video
///
/// Attaches the playback URL handed back by the upload pipeline. The URL is
/// opaque to this service.
pub async fn set_lesson_video(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<SetVideoRequest>,
) -> Response {
    let db = app_state.db();

    let course = match ownership::course_of_lesson(db, lesson_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match LessonModel::set_video_url(db, lesson_id, &req.video_url).await {
        Ok(lesson) => (
            StatusCode::OK,
            Json(ApiResponse::success(lesson, "Lesson video updated successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
