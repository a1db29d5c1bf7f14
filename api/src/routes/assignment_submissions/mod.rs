use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

use crate::auth::guards::require_instructor;
use get::{get_my_submission, get_submissions_for_assignment};
use post::create_submission;
use put::grade_submission;

pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_submission))
        .route(
            "/{submission_id}",
            put(grade_submission).route_layer(from_fn(require_instructor)),
        )
        .route(
            "/assignment/{assignment_id}",
            get(get_submissions_for_assignment).route_layer(from_fn(require_instructor)),
        )
        .route("/mine/{assignment_id}", get(get_my_submission))
}
