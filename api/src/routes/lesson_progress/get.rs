use std::collections::HashSet;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{lesson::Model as LessonModel, lesson_progress::Model as LessonProgressModel};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};

/// GET /lesson-progress/course/{course_id}
///
/// Ids of the lessons the caller has completed within this course. The course
/// viewer uses this to tick off finished lessons.
pub async fn get_course_progress(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let db = app_state.db();

    let lesson_ids: HashSet<i64> = match LessonModel::get_by_course(db, course_id).await {
        Ok(lessons) => lessons.iter().map(|l| l.id).collect(),
        Err(err) => return error_response(err.into()),
    };

    match LessonProgressModel::get_completed_by_user(db, &claims.sub).await {
        Ok(progress) => {
            let completed: Vec<i64> = progress
                .iter()
                .filter(|p| lesson_ids.contains(&p.lesson_id))
                .map(|p| p.lesson_id)
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(completed, "Lesson progress retrieved successfully")),
            )
                .into_response()
        }
        Err(err) => error_response(err.into()),
    }
}
