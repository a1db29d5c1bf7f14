use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::submissions;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::assignment_submissions::common::CreateSubmissionRequest;

/// POST /assignment-submissions
///
/// Hands in content and/or a file reference; one submission per assignment per
/// student, resubmission is a conflict.
pub async fn create_submission(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateSubmissionRequest>,
) -> Response {
    match submissions::submit(
        app_state.db(),
        &claims.sub,
        req.assignment_id,
        req.content.as_deref(),
        req.file_url.as_deref(),
    )
    .await
    {
        Ok(submission) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(submission, "Submission created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
