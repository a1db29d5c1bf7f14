use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::enrollment;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::enrollments::common::CreateEnrollmentRequest;

/// POST /enrollments
///
/// Enrolls the caller in a published course; re-enrolling is a conflict.
pub async fn create_enrollment(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateEnrollmentRequest>,
) -> Response {
    match enrollment::enroll(app_state.db(), &claims.sub, req.course_id).await {
        Ok(enrollment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(enrollment, "Enrolled successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
