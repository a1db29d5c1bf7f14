use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::review;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::reviews::common::CreateReviewRequest;

/// POST /courses/{course_id}/reviews
///
/// One review per enrolled student per course; the rating must be 1-5.
pub async fn create_review(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateReviewRequest>,
) -> Response {
    match review::create_review(
        app_state.db(),
        &claims.sub,
        course_id,
        req.rating,
        req.comment.as_deref(),
    )
    .await
    {
        Ok(review) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(review, "Review created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
