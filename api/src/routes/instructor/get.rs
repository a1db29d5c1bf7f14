use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use services::stats;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};

/// GET /instructor/courses
///
/// All of the acting instructor's courses, drafts included, newest first.
pub async fn get_instructor_courses(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match CourseModel::get_by_instructor(app_state.db(), &claims.sub).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success(courses, "Courses retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}

/// GET /instructor/stats
///
/// Aggregates over all of the instructor's courses: distinct student count,
/// completion rate, review mean (absent when there are no reviews) and count.
pub async fn get_instructor_stats(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match stats::instructor_stats(app_state.db(), &claims.sub).await {
        Ok(stats) => (
            StatusCode::OK,
            Json(ApiResponse::success(stats, "Instructor stats retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
