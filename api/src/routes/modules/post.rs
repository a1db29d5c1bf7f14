use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course::Model as CourseModel, module::Model as ModuleModel};
use services::{ServiceError, ownership};
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response, validation_error_response};
use crate::routes::modules::common::CreateModuleRequest;

/// POST /modules
///
/// Adds a module to a course the acting instructor owns.
pub async fn create_module(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateModuleRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let db = app_state.db();

    let course = match CourseModel::get_by_id(db, req.course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => return error_response(ServiceError::NotFound("Course not found".into())),
        Err(err) => return error_response(err.into()),
    };

    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match ModuleModel::create(db, req.course_id, &req.title, req.description.as_deref(), req.order)
        .await
    {
        Ok(module) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(module, "Module created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
