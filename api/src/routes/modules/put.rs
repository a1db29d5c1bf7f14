use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::module::Model as ModuleModel;
use services::ownership;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::modules::common::UpdateModuleRequest;

/// PUT /modules/{module_id}
pub async fn edit_module(
    State(app_state): State<AppState>,
    Path(module_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateModuleRequest>,
) -> Response {
    let db = app_state.db();

    let course = match ownership::course_of_module(db, module_id).await {
        Ok(course) => course,
        Err(err) => return error_response(err),
    };
    if let Err(err) = ownership::ensure_owner(&course, &claims.sub) {
        return error_response(err);
    }

    match ModuleModel::edit(
        db,
        module_id,
        req.title.as_deref(),
        req.description.as_deref(),
        req.order,
    )
    .await
    {
        Ok(module) => (
            StatusCode::OK,
            Json(ApiResponse::success(module, "Module updated successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
