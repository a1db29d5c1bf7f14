use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::review::Model as ReviewModel;
use util::state::AppState;

use crate::response::{ApiResponse, error_response};

/// GET /courses/{course_id}/reviews
///
/// All reviews of a course, newest first.
pub async fn get_reviews(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Response {
    match ReviewModel::get_by_course(app_state.db(), course_id).await {
        Ok(reviews) => (
            StatusCode::OK,
            Json(ApiResponse::success(reviews, "Reviews retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
