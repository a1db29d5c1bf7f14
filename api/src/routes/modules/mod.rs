use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use crate::auth::guards::require_instructor;
use delete::delete_module;
use get::get_modules_by_course;
use post::create_module;
use put::edit_module;

pub fn module_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_module).route_layer(from_fn(require_instructor)))
        .route("/{module_id}", put(edit_module).route_layer(from_fn(require_instructor)))
        .route("/{module_id}", delete(delete_module).route_layer(from_fn(require_instructor)))
        .route("/course/{course_id}", get(get_modules_by_course))
}
