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
pub mod reviews;

use crate::auth::guards::{allow_authenticated, require_instructor};
use delete::delete_course;
use get::{get_course, list_published_courses};
use post::{create_course, recalculate_progress};
use put::edit_course;

pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course).route_layer(from_fn(require_instructor)))
        .route("/", get(list_published_courses))
        .route("/{course_id}", get(get_course).route_layer(from_fn(allow_authenticated)))
        .route("/{course_id}", put(edit_course).route_layer(from_fn(require_instructor)))
        .route("/{course_id}", delete(delete_course).route_layer(from_fn(require_instructor)))
        .route(
            "/{course_id}/recalculate-progress",
            post(recalculate_progress).route_layer(from_fn(require_instructor)),
        )
        .nest(
            "/{course_id}/reviews",
            reviews::review_routes().route_layer(from_fn(allow_authenticated)),
        )
}
