use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use db::models::user::Model as UserModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, error_response};

/// GET /auth/user
///
/// Resolves the bearer token's claims into a local user record, creating or
/// refreshing it on the way. This is the synchronization point between the
/// identity provider and the local `users` table: every login lands here first.
pub async fn current_user(State(app_state): State<AppState>, user: AuthUser) -> Response {
    let claims = user.0;

    match UserModel::upsert(
        app_state.db(),
        &claims.sub,
        &claims.email,
        &claims.given_name,
        &claims.family_name,
        claims.role(),
    )
    .await
    {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(user, "User synchronized successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
