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
use delete::delete_lesson;
use get::get_lessons_by_module;
use post::create_lesson;
use put::{edit_lesson, set_lesson_video};

pub fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_lesson).route_layer(from_fn(require_instructor)))
        .route("/{lesson_id}", put(edit_lesson).route_layer(from_fn(require_instructor)))
        .route(
            "/{lesson_id}/video",
            put(set_lesson_video).route_layer(from_fn(require_instructor)),
        )
        .route("/{lesson_id}", delete(delete_lesson).route_layer(from_fn(require_instructor)))
        .route("/module/{module_id}", get(get_lessons_by_module))
}
