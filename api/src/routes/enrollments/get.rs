use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course::Model as CourseModel, enrollment::Model as EnrollmentModel};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::enrollments::common::EnrollmentWithCourse;

/// GET /enrollments/my-courses
///
/// The caller's enrollments, newest first, each joined with its course.
pub async fn get_my_courses(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let db = app_state.db();

    let enrollments = match EnrollmentModel::get_by_user(db, &claims.sub).await {
        Ok(enrollments) => enrollments,
        Err(err) => return error_response(err.into()),
    };

    let mut rows = Vec::with_capacity(enrollments.len());
    for enrollment in enrollments {
        let course = match CourseModel::get_by_id(db, enrollment.course_id).await {
            Ok(course) => course,
            Err(err) => return error_response(err.into()),
        };
        rows.push(EnrollmentWithCourse { enrollment, course });
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(rows, "Enrollments retrieved successfully")),
    )
        .into_response()
}

/// GET /enrollments/course-ids
///
/// Just the ids of the courses the caller is enrolled in; the front end uses
/// this to badge the catalog.
pub async fn get_enrolled_course_ids(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match EnrollmentModel::get_by_user(app_state.db(), &claims.sub).await {
        Ok(enrollments) => {
            let course_ids: Vec<i64> = enrollments.iter().map(|e| e.course_id).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(course_ids, "Course ids retrieved successfully")),
            )
                .into_response()
        }
        Err(err) => error_response(err.into()),
    }
}

/// GET /enrollments/course/{course_id}
///
/// The caller's enrollment in one course, or null data when not enrolled.
pub async fn get_enrollment_for_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match EnrollmentModel::find_by_user_and_course(app_state.db(), &claims.sub, course_id).await {
        Ok(enrollment) => (
            StatusCode::OK,
            Json(ApiResponse::success(enrollment, "Enrollment retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
