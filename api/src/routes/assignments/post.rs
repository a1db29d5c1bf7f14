use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::assignment::Model as AssignmentModel;
use services::ownership;
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response, validation_error_response};
use crate::routes::assignments::common::CreateAssignmentRequest;

/// POST /assignments
///
/// Attaches an assignment to a lesson whose course the acting instructor owns.
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let db = app_state.db();

    let course = match ownership::course_of_lesson(db, req.lesson_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match AssignmentModel::create(db, req.lesson_id, &req.title, &req.description, req.due_date)
        .await
    {
        Ok(assignment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(assignment, "Assignment created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
