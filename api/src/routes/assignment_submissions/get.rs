use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::assignment_submission::Model as SubmissionModel;
use services::ownership;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};

/// GET /assignment-submissions/assignment/{assignment_id}
///
/// Every hand-in for an assignment, for the instructor who owns its course.
pub async fn get_submissions_for_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let db = app_state.db();

    let course = match ownership::course_of_assignment(db, assignment_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match SubmissionModel::get_by_assignment(db, assignment_id).await {
        Ok(submissions) => (
            StatusCode::OK,
            Json(ApiResponse::success(submissions, "Submissions retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}

/// GET /assignment-submissions/mine/{assignment_id}
///
/// The caller's own hand-in for one assignment, or null data when none exists.
pub async fn get_my_submission(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match SubmissionModel::find_by_user_and_assignment(app_state.db(), &claims.sub, assignment_id)
        .await
    {
        Ok(submission) => (
            StatusCode::OK,
            Json(ApiResponse::success(submission, "Submission retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
