use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::get_course_progress;
use post::record_lesson_completion;

pub fn lesson_progress_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(record_lesson_completion))
        .route("/course/{course_id}", get(get_course_progress))
}
