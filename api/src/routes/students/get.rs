use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::stats;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};

/// GET /students/stats
///
/// The caller's dashboard numbers: hours of completed video across enrolled
/// courses and the mean progress over their enrollments.
pub async fn get_student_stats(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match stats::student_stats(app_state.db(), &claims.sub).await {
        Ok(stats) => (
            StatusCode::OK,
            Json(ApiResponse::success(stats, "Student stats retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
