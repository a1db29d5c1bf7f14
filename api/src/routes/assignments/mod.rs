use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use crate::auth::guards::require_instructor;
use get::get_assignments_by_lesson;
use post::create_assignment;

pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment).route_layer(from_fn(require_instructor)))
        .route("/lesson/{lesson_id}", get(get_assignments_by_lesson))
}
