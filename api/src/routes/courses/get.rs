use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{
    course::{Model as CourseModel, Status},
    enrollment::Model as EnrollmentModel,
    lesson::Model as LessonModel,
    module::Model as ModuleModel,
};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, Empty, error_response};
use crate::routes::courses::common::{CourseWithContent, ModuleWithLessons};

/// GET /courses
///
/// Public catalog of published courses. Draft and archived courses never
/// appear here regardless of caller.
pub async fn list_published_courses(State(app_state): State<AppState>) -> Response {
    match CourseModel::get_published(app_state.db()).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success(courses, "Courses retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}

/// GET /courses/{course_id}
///
/// Course detail with modules and lessons. Draft courses are visible only to
/// their owner; otherwise full content requires ownership, enrollment, or the
/// course being published.
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let db = app_state.db();

    let course = match CourseModel::get_by_id(db, course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Course not found")),
            )
                .into_response();
        }
        Err(err) => return error_response(err.into()),
    };

    let is_owner = course.instructor_id == claims.sub;
    let is_enrolled = match EnrollmentModel::find_by_user_and_course(db, &claims.sub, course.id).await
    {
        Ok(enrollment) => enrollment.is_some(),
        Err(err) => return error_response(err.into()),
    };

    if course.status == Status::Draft && !is_owner {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error("This course is not published yet")),
        )
            .into_response();
    }

    if course.status != Status::Published && !is_owner && !is_enrolled {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error("Access denied")),
        )
            .into_response();
    }

    let modules = match ModuleModel::get_by_course(db, course.id).await {
        Ok(modules) => modules,
        Err(err) => return error_response(err.into()),
    };

    let mut modules_with_lessons = Vec::with_capacity(modules.len());
    for module in modules {
        let lessons = match LessonModel::get_by_module(db, module.id).await {
            Ok(lessons) => lessons,
            Err(err) => return error_response(err.into()),
        };
        modules_with_lessons.push(ModuleWithLessons { module, lessons });
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            CourseWithContent {
                course,
                modules: modules_with_lessons,
            },
            "Course retrieved successfully",
        )),
    )
        .into_response()
}
