use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::submissions;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::assignment_submissions::common::GradeSubmissionRequest;

/// PUT /assignment-submissions/{submission_id}
///
/// Records a grade in [0, 100] with optional feedback. Only the instructor who
/// owns the submission's course may grade it.
pub async fn grade_submission(
    State(app_state): State<AppState>,
    Path(submission_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<GradeSubmissionRequest>,
) -> Response {
    match submissions::grade_submission(
        app_state.db(),
        &claims.sub,
        submission_id,
        req.grade,
        req.feedback.as_deref(),
    )
    .await
    {
        Ok(submission) => (
            StatusCode::OK,
            Json(ApiResponse::success(submission, "Submission graded successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
