use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lesson::Model as LessonModel;
use services::ownership;
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response, validation_error_response};
use crate::routes::lessons::common::CreateLessonRequest;

/// POST /lessons
///
/// Adds a lesson to a module whose course the acting instructor owns.
pub async fn create_lesson(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateLessonRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let db = app_state.db();

    let course = match ownership::course_of_module(db, req.module_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match LessonModel::create(
        db,
        req.module_id,
        &req.title,
        req.description.as_deref(),
        req.video_url.as_deref(),
        req.duration,
        req.order,
    )
    .await
    {
        Ok(lesson) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(lesson, "Lesson created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
