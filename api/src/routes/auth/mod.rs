use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::current_user;

/// `/auth` route group. Login and logout live entirely at the identity
/// provider; the only endpoint here resolves a verified token into the local
/// user record.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/user", get(current_user))
}
