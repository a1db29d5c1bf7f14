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
use get::{get_quiz_questions, get_quizzes_by_lesson};
use post::create_quiz;

pub fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_quiz).route_layer(from_fn(require_instructor)))
        .route("/{quiz_id}/questions", get(get_quiz_questions))
        .route("/lesson/{lesson_id}", get(get_quizzes_by_lesson))
}
