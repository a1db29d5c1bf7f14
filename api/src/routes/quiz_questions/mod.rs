use axum::{Router, routing::post};
use util::state::AppState;

pub mod common;
pub mod post;

use post::create_quiz_question;

/// `/quiz-questions` route group; instructor-only at the router level.
pub fn quiz_question_routes() -> Router<AppState> {
    Router::new().route("/", post(create_quiz_question))
}
